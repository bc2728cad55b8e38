//! Crawl orchestration
//!
//! Iterates the configured conferences and years, fetching and extracting one
//! proceedings page at a time with a politeness delay between requests, then
//! runs persistence and analytics per conference. Fetch and parse failures
//! are logged and counted but never abort the run.

pub mod fetcher;

use anyhow::{Context, Result};
use std::time::Instant;

use crate::analytics::{count_by_year, keyword_frequencies, predict};
use crate::config::{Config, ConferenceConfig};
use crate::error::{CrawlerError, ParseError};
use crate::models::{CrawlStats, Paper};
use crate::parser::ListingParser;
use crate::report::Reporter;
use crate::storage;

use fetcher::PageFetcher;

/// Main crawler: fetch, extract, persist, analyze
pub struct Crawler {
    fetcher: PageFetcher,
    parser: ListingParser,
    reporter: Reporter,
    config: Config,
}

impl Crawler {
    /// Create a new crawler instance
    pub fn new(config: Config) -> Result<Self> {
        config.validate().context("Invalid configuration")?;

        let fetcher = PageFetcher::new(
            &config.crawler.user_agent,
            config.request_timeout(),
            config.request_delay(),
        )
        .context("Failed to create HTTP client")?;

        Ok(Self {
            fetcher,
            parser: ListingParser::new(),
            reporter: Reporter::new(&config.output),
            config,
        })
    }

    /// Create a crawler whose requests go to a mock server base URL
    pub fn with_base_url(config: Config, base_url: &str) -> Result<Self> {
        config.validate().context("Invalid configuration")?;

        let fetcher = PageFetcher::with_base_url(
            base_url,
            &config.crawler.user_agent,
            config.request_timeout(),
            config.request_delay(),
        )
        .context("Failed to create HTTP client")?;

        Ok(Self {
            fetcher,
            parser: ListingParser::new(),
            reporter: Reporter::new(&config.output),
            config,
        })
    }

    /// Crawl every configured conference, or just one when a key is given
    ///
    /// Returns accumulated statistics. A conference with zero records is
    /// logged and skipped; the run continues.
    pub async fn run(&self, only: Option<&str>) -> Result<CrawlStats> {
        let started = Instant::now();
        let mut stats = CrawlStats::default();

        for conf in &self.config.conferences {
            if let Some(key) = only {
                if conf.key != key {
                    continue;
                }
            }

            let conf_stats = self.process_conference(conf).await;
            stats.merge(&conf_stats);
        }

        stats.duration = started.elapsed();
        tracing::info!(
            papers = stats.papers_found,
            conferences = stats.conferences_processed,
            fetch_errors = stats.fetch_errors,
            parse_mismatches = stats.parse_mismatches,
            elapsed_secs = stats.duration.as_secs(),
            "Crawl finished"
        );

        Ok(stats)
    }

    /// Crawl all years of one conference, then persist and analyze
    async fn process_conference(&self, conf: &ConferenceConfig) -> CrawlStats {
        tracing::info!(
            conference = %conf.name,
            start_year = conf.start_year,
            end_year = conf.end_year,
            "Crawling conference"
        );

        let mut stats = CrawlStats {
            conferences_processed: 1,
            ..Default::default()
        };
        let mut papers: Vec<Paper> = Vec::new();

        for year in conf.years() {
            stats.years_visited += 1;

            match self.crawl_year(conf, year).await {
                Ok(year_papers) => {
                    tracing::info!(
                        conference = %conf.name,
                        year,
                        papers = year_papers.len(),
                        "Fetched proceedings page"
                    );
                    papers.extend(year_papers);
                }
                Err(CrawlerError::Parse(ParseError::NoEntries)) => {
                    // Page fetched but no entries matched; likely a layout change
                    tracing::warn!(
                        conference = %conf.name,
                        year,
                        "No paper entries found, page structure may have changed"
                    );
                    stats.parse_mismatches += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        conference = %conf.name,
                        year,
                        error = %e,
                        "Fetch failed, treating year as empty"
                    );
                    stats.fetch_errors += 1;
                }
            }
        }

        if papers.is_empty() {
            tracing::warn!(conference = %conf.name, "No papers collected, skipping analysis");
            return stats;
        }
        stats.papers_found = papers.len() as u64;

        let csv_path = self
            .reporter
            .csv_path(&conf.name, conf.start_year, conf.end_year);
        if let Err(e) = storage::write_papers(&csv_path, &papers).await {
            tracing::error!(conference = %conf.name, error = %e, "CSV write failed");
        }

        analyze(&self.reporter, &conf.name, &papers);

        stats
    }

    /// Fetch and extract one (conference, year) proceedings page
    async fn crawl_year(
        &self,
        conf: &ConferenceConfig,
        year: i32,
    ) -> Result<Vec<Paper>, CrawlerError> {
        let url = conf.url_for(year);
        tracing::debug!(url = %url, "Fetching proceedings page");

        let html = self.fetcher.fetch(&url).await?;
        let papers = self.parser.parse(&html, &conf.name, year)?;
        Ok(papers)
    }
}

/// Run aggregation, keyword analysis, reports and forecast for one conference
///
/// Shared between the crawl pipeline and the offline `analyze` command.
pub fn analyze(reporter: &Reporter, conference: &str, papers: &[Paper]) {
    let year_counts = count_by_year(papers);
    let frequencies = keyword_frequencies(papers.iter().map(|p| p.title.as_str()));

    reporter.write_all(conference, &year_counts, &frequencies);

    match predict(&year_counts) {
        Ok(forecast) => {
            tracing::info!(
                conference,
                next_year = forecast.next_year,
                predicted = forecast.predicted,
                "Computed next-year prediction"
            );
            reporter.write_prediction(conference, &forecast);
        }
        Err(e) => tracing::info!(conference, reason = %e, "Forecast skipped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawler_creation() {
        let crawler = Crawler::new(Config::default());
        assert!(crawler.is_ok());
    }

    #[test]
    fn test_crawler_rejects_invalid_config() {
        let mut config = Config::default();
        config.conferences.clear();
        assert!(Crawler::new(config).is_err());
    }

    #[test]
    fn test_analyze_skips_forecast_for_single_year() {
        let dir = tempfile::tempdir().unwrap();
        let output = crate::config::OutputConfig {
            dir: dir.path().to_path_buf(),
            top_keywords: 20,
            wordcloud_max_words: 200,
        };
        let reporter = Reporter::new(&output);

        let papers = vec![Paper::new(
            "Neural Architectures for Parsing".to_string(),
            "Alice".to_string(),
            "AAAI",
            2024,
            String::new(),
        )];
        analyze(&reporter, "AAAI", &papers);

        assert!(!dir.path().join("aaai_prediction.txt").exists());
        assert!(dir.path().join("aaai_top_keywords.txt").exists());
    }
}
