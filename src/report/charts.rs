//! Chart rendering with plotters
//!
//! Two PNG artifacts per conference: a line chart of paper counts per year
//! and a horizontal bar chart of the top title keywords.

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;

use crate::models::YearCounts;

const TREND_SIZE: (u32, u32) = (1000, 600);
const BAR_SIZE: (u32, u32) = (1200, 800);

/// Render the papers-per-year line chart
pub fn trend_chart(
    path: &Path,
    conference: &str,
    year_counts: &YearCounts,
    font_family: &str,
) -> Result<()> {
    let mut series: Vec<(i32, u64)> = year_counts
        .iter()
        .filter_map(|(year, &count)| year.parse::<i32>().ok().map(|y| (y, count)))
        .collect();
    series.sort_by_key(|&(year, _)| year);

    if series.is_empty() {
        return Err(anyhow!("no yearly counts to plot"));
    }

    draw_trend(path, conference, &series, font_family)
        .map_err(|e| anyhow!("failed to render trend chart: {e}"))
}

fn draw_trend(
    path: &Path,
    conference: &str,
    series: &[(i32, u64)],
    font_family: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, TREND_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = series[0].0;
    let x_max = series[series.len() - 1].0;
    let y_max = series.iter().map(|&(_, c)| c).max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{conference} papers per year"),
            (font_family, 28),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min - 1..x_max + 1, 0u64..y_max + y_max / 10 + 1)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Papers")
        .x_labels(series.len() + 2)
        .x_label_formatter(&|x| x.to_string())
        .draw()?;

    chart.draw_series(LineSeries::new(series.iter().copied(), BLUE.stroke_width(2)))?;
    chart.draw_series(
        series
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
    )?;

    // Point labels above each marker
    chart.draw_series(series.iter().map(|&(x, y)| {
        Text::new(
            y.to_string(),
            (x, y + y_max / 25 + 1),
            (font_family, 14).into_font(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Render the top-keyword horizontal bar chart, most frequent at the top
pub fn keyword_bar_chart(
    path: &Path,
    conference: &str,
    top: &[(String, u64)],
    font_family: &str,
) -> Result<()> {
    if top.is_empty() {
        return Err(anyhow!("no keywords to plot"));
    }

    draw_bars(path, conference, top, font_family)
        .map_err(|e| anyhow!("failed to render keyword bar chart: {e}"))
}

fn draw_bars(
    path: &Path,
    conference: &str,
    top: &[(String, u64)],
    font_family: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, BAR_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Axis index 0 sits at the bottom; reverse so rank 1 ends up on top
    let rows: Vec<(&str, u64)> = top.iter().rev().map(|(w, c)| (w.as_str(), *c)).collect();
    let x_max = rows.iter().map(|&(_, c)| c).max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{conference} top {} title keywords", top.len()),
            (font_family, 28),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(180)
        .build_cartesian_2d(0u64..x_max + x_max / 10 + 1, (0usize..rows.len()).into_segmented())?;

    chart
        .configure_mesh()
        .x_desc("Frequency")
        .y_desc("Keyword")
        .disable_y_mesh()
        .y_label_formatter(&|pos| match pos {
            SegmentValue::CenterOf(i) if *i < rows.len() => rows[*i].0.to_string(),
            _ => String::new(),
        })
        .y_labels(rows.len())
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, &(_, count))| {
        Rectangle::new(
            [
                (0, SegmentValue::Exact(i)),
                (count, SegmentValue::Exact(i + 1)),
            ],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
