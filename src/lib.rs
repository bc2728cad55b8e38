//! dblp-trends - DBLP conference paper crawler and trend analyzer
//!
//! Crawls dblp.org proceedings pages for a configured set of conferences,
//! extracts per-paper metadata, persists it to CSV, and produces descriptive
//! analytics: yearly counts with a trend chart, title keyword frequencies
//! with a bar chart and ranked listing, an optional word cloud, and a naive
//! next-year volume prediction.
//!
//! # Architecture
//!
//! - [`config`] - Conference table and crawler settings
//! - [`crawler`] - Fetch orchestration with a politeness delay
//! - [`parser`] - Proceedings page parsing and paper extraction
//! - [`analytics`] - Yearly counts, keyword frequencies, forecasting
//! - [`report`] - Chart, word-cloud and text report rendering
//! - [`storage`] - CSV persistence
//! - [`models`] - Core data structures
//!
//! # Example
//!
//! ```no_run
//! use dblp_trends::config::Config;
//! use dblp_trends::crawler::Crawler;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let crawler = Crawler::new(config)?;
//!     let stats = crawler.run(None).await?;
//!     println!("Crawled {} papers", stats.papers_found);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod crawler;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod storage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConferenceConfig};
    pub use crate::crawler::Crawler;
    pub use crate::error::{CrawlerError, FetchError, ForecastError, ParseError};
    pub use crate::models::{CrawlStats, Paper, YearCounts};
    pub use crate::parser::ListingParser;
    pub use crate::report::Reporter;
}

// Direct re-exports for convenience
pub use models::{CrawlStats, Paper, YearCounts};
