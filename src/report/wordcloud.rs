//! Word-cloud rendering (optional capability, `wordcloud` feature)
//!
//! Places words on an archimedean spiral from the canvas center outwards,
//! sized proportionally to their frequency, skipping positions that would
//! overlap an already-placed word. Layout works on estimated glyph boxes, so
//! it needs no font metrics.

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;

use crate::analytics::{top_keywords, WordFrequencies};

const CANVAS: (u32, u32) = (800, 400);
const MIN_FONT: f64 = 12.0;
const MAX_FONT: f64 = 64.0;

/// Fixed palette cycled over placed words
const PALETTE: &[RGBColor] = &[
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];

/// Estimated bounding box of a placed word, in canvas pixels
#[derive(Debug, Clone, Copy)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Rect {
    fn intersects(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    fn within(&self, width: f64, height: f64) -> bool {
        self.x0 >= 0.0 && self.y0 >= 0.0 && self.x1 <= width && self.y1 <= height
    }
}

/// Word with its computed layout position
#[derive(Debug, Clone)]
struct Placement {
    word: String,
    size: f64,
    x: i32,
    y: i32,
}

/// Render the word cloud PNG from a frequency map
///
/// At most `max_words` words are drawn; words that cannot be placed without
/// overlap are dropped silently.
pub fn render(
    path: &Path,
    frequencies: &WordFrequencies,
    max_words: usize,
    font_family: &str,
) -> Result<()> {
    if frequencies.is_empty() {
        return Err(anyhow!("no words to render"));
    }

    let words = top_keywords(frequencies, max_words);
    let placements = layout(&words, CANVAS.0 as f64, CANVAS.1 as f64);

    draw(path, &placements, font_family)
        .map_err(|e| anyhow!("failed to render word cloud: {e}"))
}

/// Compute spiral placements for the given ranked words
fn layout(words: &[(String, u64)], width: f64, height: f64) -> Vec<Placement> {
    let max_count = words.first().map(|&(_, c)| c).unwrap_or(1).max(1);
    let min_count = words.last().map(|&(_, c)| c).unwrap_or(1);

    let mut placed: Vec<Rect> = Vec::new();
    let mut placements = Vec::new();

    for (word, count) in words {
        let size = font_size(*count, min_count, max_count);
        if let Some(rect) = find_spot(word, size, &placed, width, height) {
            placements.push(Placement {
                word: word.clone(),
                size,
                x: rect.x0 as i32,
                y: rect.y0 as i32,
            });
            placed.push(rect);
        }
    }

    placements
}

/// Linear size scale between MIN_FONT and MAX_FONT
fn font_size(count: u64, min_count: u64, max_count: u64) -> f64 {
    if max_count == min_count {
        return (MIN_FONT + MAX_FONT) / 2.0;
    }
    let t = (count - min_count) as f64 / (max_count - min_count) as f64;
    MIN_FONT + t * (MAX_FONT - MIN_FONT)
}

/// Walk the spiral until the word's box fits without overlap
fn find_spot(word: &str, size: f64, placed: &[Rect], width: f64, height: f64) -> Option<Rect> {
    let w = estimated_width(word, size);
    let h = size * 1.15;
    let cx = width / 2.0;
    let cy = height / 2.0;

    let mut t = 0.0f64;
    while t < 220.0 {
        let r = 1.8 * t;
        let x = cx + r * t.cos() * 1.4;
        let y = cy + r * t.sin() * 0.7;

        let rect = Rect {
            x0: x - w / 2.0,
            y0: y - h / 2.0,
            x1: x + w / 2.0,
            y1: y + h / 2.0,
        };

        if rect.within(width, height) && !placed.iter().any(|p| p.intersects(&rect)) {
            return Some(rect);
        }

        t += 0.35;
    }

    None
}

/// Rough glyph-box width without font metrics
fn estimated_width(word: &str, size: f64) -> f64 {
    word.chars().count() as f64 * size * 0.6
}

fn draw(
    path: &Path,
    placements: &[Placement],
    font_family: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    for (i, placement) in placements.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let style = (font_family, placement.size as i32)
            .into_font()
            .color(&color);
        root.draw(&Text::new(
            placement.word.clone(),
            (placement.x, placement.y),
            style,
        ))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(pairs: &[(&str, u64)]) -> WordFrequencies {
        pairs.iter().map(|&(w, c)| (w.to_string(), c)).collect()
    }

    #[test]
    fn test_render_rejects_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.png");
        let result = render(&path, &WordFrequencies::new(), 200, "sans-serif");
        assert!(result.is_err());
    }

    #[test]
    fn test_font_size_scale() {
        assert_eq!(font_size(10, 1, 10), MAX_FONT);
        assert_eq!(font_size(1, 1, 10), MIN_FONT);
        assert_eq!(font_size(5, 5, 5), (MIN_FONT + MAX_FONT) / 2.0);
    }

    #[test]
    fn test_layout_produces_no_overlaps() {
        let words: Vec<(String, u64)> = (0..50)
            .map(|i| (format!("word{i}"), 50 - i as u64))
            .collect();
        let placements = layout(&words, 800.0, 400.0);
        assert!(!placements.is_empty());

        let rects: Vec<Rect> = placements
            .iter()
            .map(|p| {
                let w = estimated_width(&p.word, p.size);
                Rect {
                    x0: p.x as f64,
                    y0: p.y as f64,
                    x1: p.x as f64 + w,
                    y1: p.y as f64 + p.size * 1.15,
                }
            })
            .collect();
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(b), "placed words overlap");
            }
        }
    }

    #[test]
    fn test_layout_caps_word_count() {
        let freq = frequencies(&[("alpha", 10), ("beta", 5), ("gamma", 2)]);
        let top = top_keywords(&freq, 2);
        let placements = layout(&top, 800.0, 400.0);
        assert!(placements.len() <= 2);
    }

    #[test]
    fn test_most_frequent_word_placed_first_and_largest() {
        let words = vec![
            ("dominant".to_string(), 100u64),
            ("minor".to_string(), 1u64),
        ];
        let placements = layout(&words, 800.0, 400.0);
        assert_eq!(placements[0].word, "dominant");
        assert!(placements[0].size > placements[1].size);
    }
}
