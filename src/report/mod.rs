//! Report artifact generation
//!
//! Each conference gets a set of files under the output directory: the paper
//! trend chart, keyword bar chart, ranked keyword listing, forecast report,
//! and (when the `wordcloud` feature is enabled) a word-cloud image. Every
//! path is best-effort: a failed artifact is logged and the rest are still
//! attempted.

pub mod charts;
pub mod fonts;
#[cfg(feature = "wordcloud")]
pub mod wordcloud;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::analytics::{top_keywords, Forecast, WordFrequencies};
use crate::config::OutputConfig;
use crate::models::YearCounts;

/// Renders all per-conference report artifacts
pub struct Reporter {
    output_dir: PathBuf,
    top_n: usize,
    wordcloud_max_words: usize,

    /// Word-cloud capability, resolved once at startup
    wordcloud_enabled: bool,

    /// Chart font family, from host font discovery
    font_family: String,
}

impl Reporter {
    /// Create a reporter for the given output settings
    ///
    /// The word-cloud capability flag reflects whether the crate was built
    /// with the `wordcloud` feature.
    #[must_use]
    pub fn new(output: &OutputConfig) -> Self {
        let wordcloud_enabled = cfg!(feature = "wordcloud");
        if !wordcloud_enabled {
            tracing::info!("Word-cloud rendering not built in; skipping that artifact");
        }

        Self {
            output_dir: output.dir.clone(),
            top_n: output.top_keywords,
            wordcloud_max_words: output.wordcloud_max_words,
            wordcloud_enabled,
            font_family: fonts::chart_family(),
        }
    }

    /// Whether word-cloud images will be produced
    #[must_use]
    pub fn wordcloud_enabled(&self) -> bool {
        self.wordcloud_enabled
    }

    /// Write every report artifact for one conference, best-effort
    pub fn write_all(
        &self,
        conference: &str,
        year_counts: &YearCounts,
        frequencies: &WordFrequencies,
    ) {
        self.write_trend_chart(conference, year_counts);
        self.write_keyword_artifacts(conference, frequencies);
        self.write_wordcloud(conference, frequencies);
    }

    fn write_trend_chart(&self, conference: &str, year_counts: &YearCounts) {
        if year_counts.is_empty() {
            tracing::info!(conference, "No yearly counts, skipping trend chart");
            return;
        }

        let path = self.artifact_path(conference, "paper_trend.png");
        match charts::trend_chart(&path, conference, year_counts, &self.font_family) {
            Ok(()) => tracing::info!(path = %path.display(), "Saved paper trend chart"),
            Err(e) => tracing::error!(conference, error = %e, "Trend chart failed"),
        }
    }

    fn write_keyword_artifacts(&self, conference: &str, frequencies: &WordFrequencies) {
        let top = top_keywords(frequencies, self.top_n);
        if top.is_empty() {
            tracing::info!(conference, "No keywords, skipping keyword artifacts");
            return;
        }

        let chart_path = self.artifact_path(conference, "keywords_bar.png");
        match charts::keyword_bar_chart(&chart_path, conference, &top, &self.font_family) {
            Ok(()) => tracing::info!(path = %chart_path.display(), "Saved keyword bar chart"),
            Err(e) => tracing::error!(conference, error = %e, "Keyword bar chart failed"),
        }

        let listing_path = self.artifact_path(conference, "top_keywords.txt");
        match std::fs::write(&listing_path, render_keyword_listing(conference, &top)) {
            Ok(()) => tracing::info!(path = %listing_path.display(), "Saved keyword listing"),
            Err(e) => tracing::error!(conference, error = %e, "Keyword listing failed"),
        }
    }

    #[cfg(feature = "wordcloud")]
    fn write_wordcloud(&self, conference: &str, frequencies: &WordFrequencies) {
        if !self.wordcloud_enabled || frequencies.is_empty() {
            return;
        }

        let path = self.artifact_path(conference, "wordcloud.png");
        match wordcloud::render(
            &path,
            frequencies,
            self.wordcloud_max_words,
            &self.font_family,
        ) {
            Ok(()) => tracing::info!(path = %path.display(), "Saved word cloud"),
            Err(e) => tracing::error!(conference, error = %e, "Word cloud failed"),
        }
    }

    #[cfg(not(feature = "wordcloud"))]
    fn write_wordcloud(&self, _conference: &str, _frequencies: &WordFrequencies) {}

    /// Write the forecast text report, best-effort
    pub fn write_prediction(&self, conference: &str, forecast: &Forecast) {
        let path = self.artifact_path(conference, "prediction.txt");
        match std::fs::write(&path, forecast.to_report(conference)) {
            Ok(()) => tracing::info!(path = %path.display(), "Saved prediction report"),
            Err(e) => tracing::error!(conference, error = %e, "Prediction report failed"),
        }
    }

    /// CSV path for one conference's crawled records
    #[must_use]
    pub fn csv_path(&self, conference: &str, start_year: i32, end_year: i32) -> PathBuf {
        self.output_dir.join(format!(
            "{}_papers_{}_{}.csv",
            conference.to_lowercase(),
            start_year,
            end_year
        ))
    }

    fn artifact_path(&self, conference: &str, suffix: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}", conference.to_lowercase(), suffix))
    }
}

/// Ranked keyword listing written next to the bar chart
fn render_keyword_listing(conference: &str, top: &[(String, u64)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} title keywords (top {}):", conference, top.len());
    for (rank, (word, count)) in top.iter().enumerate() {
        let _ = writeln!(out, "{}. {}: {}", rank + 1, word, count);
    }
    out
}

/// Create the output directory; failures here abort the run
pub fn prepare_output_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| anyhow::anyhow!("failed to create output directory {}: {e}", dir.display()))
}
