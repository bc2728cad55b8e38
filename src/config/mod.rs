//! Configuration management for the dblp-trends crawler
//!
//! This module handles the compiled-in conference table and loading overrides
//! from environment variables and TOML files. The configuration is an explicit
//! structure handed to the orchestrator, so tests can inject their own tables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Crawler configuration
    pub crawler: CrawlerConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Conferences to crawl
    pub conferences: Vec<ConferenceConfig>,
}

/// Crawler-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Delay between requests in milliseconds (politeness)
    pub delay_ms: u64,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for CSV, chart and report files
    pub dir: PathBuf,

    /// Number of keywords in the bar chart and ranked listing
    pub top_keywords: usize,

    /// Maximum number of words rendered into the word cloud
    pub wordcloud_max_words: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

/// One conference: a short key, a display name, and a year-templated URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceConfig {
    /// Short key used for filtering (e.g., "aaai")
    pub key: String,

    /// Display name used in reports and file names (e.g., "AAAI")
    pub name: String,

    /// URL template with a `{year}` placeholder
    pub url_template: String,

    /// First year to crawl (inclusive)
    pub start_year: i32,

    /// Last year to crawl (inclusive)
    pub end_year: i32,

    /// Conference is held in odd years only; even years are skipped
    #[serde(default)]
    pub biennial_odd: bool,
}

impl ConferenceConfig {
    /// Build the proceedings URL for one year
    #[must_use]
    pub fn url_for(&self, year: i32) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }

    /// Years to crawl, honoring the biennial filter
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        (self.start_year..=self.end_year).filter(move |y| !self.biennial_odd || y % 2 != 0)
    }
}

impl Config {
    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(delay) = std::env::var("DBLP_TRENDS_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.crawler.delay_ms = delay;
        }

        if let Some(timeout) = std::env::var("DBLP_TRENDS_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.crawler.request_timeout_secs = timeout;
        }

        if let Ok(agent) = std::env::var("DBLP_TRENDS_USER_AGENT") {
            config.crawler.user_agent = agent;
        }

        if let Ok(dir) = std::env::var("DBLP_TRENDS_OUTPUT_DIR") {
            config.output.dir = dir.into();
        }

        if let Ok(level) = std::env::var("DBLP_TRENDS_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.crawler.delay_ms == 0 {
            anyhow::bail!("delay_ms must be greater than 0");
        }

        if self.crawler.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.output.top_keywords == 0 {
            anyhow::bail!("top_keywords must be greater than 0");
        }

        if self.conferences.is_empty() {
            anyhow::bail!("at least one conference must be configured");
        }

        for conf in &self.conferences {
            if !conf.url_template.contains("{year}") {
                anyhow::bail!(
                    "url_template for '{}' must contain a {{year}} placeholder",
                    conf.key
                );
            }
            if conf.start_year > conf.end_year {
                anyhow::bail!(
                    "start_year {} is after end_year {} for '{}'",
                    conf.start_year,
                    conf.end_year,
                    conf.key
                );
            }
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.crawler.request_timeout_secs)
    }

    /// Get inter-request delay as Duration
    #[must_use]
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.crawler.delay_ms)
    }

    /// Look up a conference by its short key
    #[must_use]
    pub fn conference(&self, key: &str) -> Option<&ConferenceConfig> {
        self.conferences.iter().find(|c| c.key == key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig {
                delay_ms: 2000,
                request_timeout_secs: 30,
                user_agent: String::from(
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
                ),
            },
            output: OutputConfig {
                dir: PathBuf::from("output"),
                top_keywords: 20,
                wordcloud_max_words: 200,
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
            conferences: vec![
                ConferenceConfig {
                    key: String::from("aaai"),
                    name: String::from("AAAI"),
                    url_template: String::from("https://dblp.org/db/conf/aaai/aaai{year}.html"),
                    start_year: 2020,
                    end_year: 2025,
                    biennial_odd: false,
                },
                ConferenceConfig {
                    key: String::from("cvpr"),
                    name: String::from("CVPR"),
                    url_template: String::from("https://dblp.org/db/conf/cvpr/cvpr{year}.html"),
                    start_year: 2020,
                    end_year: 2024,
                    biennial_odd: false,
                },
                ConferenceConfig {
                    key: String::from("iccv"),
                    name: String::from("ICCV"),
                    url_template: String::from("https://dblp.org/db/conf/iccv/iccv{year}.html"),
                    start_year: 2019,
                    end_year: 2023,
                    biennial_odd: true,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.conferences.len(), 3);
    }

    #[test]
    fn test_invalid_delay() {
        let mut config = Config::default();
        config.crawler.delay_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let mut config = Config::default();
        config.conferences[0].url_template = String::from("https://dblp.org/db/conf/aaai.html");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_url_for_substitutes_year() {
        let config = Config::default();
        let aaai = config.conference("aaai").unwrap();
        assert_eq!(
            aaai.url_for(2024),
            "https://dblp.org/db/conf/aaai/aaai2024.html"
        );
    }

    #[test]
    fn test_biennial_years_skip_even() {
        let config = Config::default();
        let iccv = config.conference("iccv").unwrap();
        let years: Vec<i32> = iccv.years().collect();
        assert_eq!(years, vec![2019, 2021, 2023]);
    }

    #[test]
    fn test_annual_years_are_contiguous() {
        let config = Config::default();
        let cvpr = config.conference("cvpr").unwrap();
        let years: Vec<i32> = cvpr.years().collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024]);
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.request_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let restored: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.conferences.len(), config.conferences.len());
        assert!(restored.conference("iccv").unwrap().biennial_odd);
    }
}
