// Core data structures for the dblp-trends crawler

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Yearly paper counts, keyed by year as text so iteration is sorted by year
pub type YearCounts = BTreeMap<String, u64>;

/// One paper entry extracted from a proceedings listing page
///
/// Records are immutable after extraction. The serde field order defines the
/// CSV column order: title, authors, year, conference, link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,

    /// Author names joined with "; "
    pub authors: String,

    /// Publication year as text, matching the fetch request
    pub year: String,

    /// Conference display name (e.g., "AAAI")
    pub conference: String,

    /// Canonical link: DOI preferred, else dblp record page, else empty
    pub link: String,
}

impl Paper {
    /// Create a paper for a specific conference and year
    pub fn new(title: String, authors: String, conference: &str, year: i32, link: String) -> Self {
        Self {
            title,
            authors,
            year: year.to_string(),
            conference: conference.to_string(),
            link,
        }
    }
}

/// Per-run crawl statistics
///
/// Fetch errors and structural parse mismatches are tracked separately from
/// years that legitimately returned zero papers.
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    pub papers_found: u64,
    pub years_visited: u32,
    pub fetch_errors: u32,
    pub parse_mismatches: u32,
    pub conferences_processed: u32,
    pub duration: Duration,
}

impl CrawlStats {
    /// Merge statistics from another run segment
    pub fn merge(&mut self, other: &CrawlStats) {
        self.papers_found += other.papers_found;
        self.years_visited += other.years_visited;
        self.fetch_errors += other.fetch_errors;
        self.parse_mismatches += other.parse_mismatches;
        self.conferences_processed += other.conferences_processed;
    }

    /// Fraction of visited years that failed to fetch, as a percentage
    pub fn error_rate(&self) -> f64 {
        if self.years_visited == 0 {
            0.0
        } else {
            (self.fetch_errors as f64 / self.years_visited as f64) * 100.0
        }
    }
}
