//! Error types for the dblp-trends crawler
//!
//! This module defines custom error types used throughout the application.

use thiserror::Error;

/// Errors that can occur during HTTP fetching operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur when extracting papers from a proceedings page
#[derive(Error, Debug)]
pub enum ParseError {
    /// No paper entries matched the expected page structure.
    /// Usually means the page layout changed, not that the year had no papers.
    #[error("No paper entries found on page")]
    NoEntries,
}

/// Top-level crawler errors at the fetch/extract boundary
///
/// Keeping fetch and parse failures distinct lets the orchestrator tell
/// "fetch failed" apart from "legitimately zero papers this year".
#[derive(Error, Debug)]
pub enum CrawlerError {
    /// Fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors that prevent computing a forecast
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Fewer than two distinct years observed
    #[error("Insufficient data points: need at least 2 years, got {0}")]
    InsufficientData(usize),

    /// Year field that does not parse as an integer
    #[error("Invalid year value: {0}")]
    InvalidYear(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status(503);
        assert_eq!(err.to_string(), "Server returned status 503");

        let err = ParseError::NoEntries;
        assert!(err.to_string().contains("No paper entries"));

        let err = ForecastError::InsufficientData(1);
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn test_crawler_error_from_fetch() {
        let err: CrawlerError = FetchError::Timeout.into();
        assert!(matches!(err, CrawlerError::Fetch(_)));
    }

    #[test]
    fn test_crawler_error_from_parse() {
        let err: CrawlerError = ParseError::NoEntries.into();
        assert!(matches!(err, CrawlerError::Parse(_)));
    }
}
