//! HTTP fetcher with a politeness delay between requests
//!
//! One GET per (conference, year) proceedings page. A governor rate limiter
//! enforces the configured inter-request delay; there is no retry. A failed
//! fetch is reported to the caller and the year is treated as empty.

use crate::error::FetchError;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::Client;
use std::num::NonZeroU32;
use std::time::Duration;

/// Proceedings page fetcher
pub struct PageFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter enforcing the politeness delay
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Optional base URL override for testing with mock servers
    base_url: Option<String>,
}

impl PageFetcher {
    /// Create a new fetcher
    ///
    /// # Arguments
    ///
    /// * `user_agent` - User-Agent header sent with every request
    /// * `timeout` - Request timeout duration
    /// * `delay` - Minimum interval between requests
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(user_agent: &str, timeout: Duration, delay: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .build()?;

        let quota = Quota::with_period(delay)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::new(1).unwrap()))
            .allow_burst(NonZeroU32::new(1).unwrap());
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            rate_limiter,
            base_url: None,
        })
    }

    /// Create a fetcher with a custom base URL for testing
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_base_url(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        delay: Duration,
    ) -> Result<Self, FetchError> {
        let mut fetcher = Self::new(user_agent, timeout, delay)?;
        fetcher.base_url = Some(base_url.to_string());
        Ok(fetcher)
    }

    /// Fetch one proceedings page
    ///
    /// Waits for the politeness delay, issues a single GET, and returns the
    /// page body. A non-success status comes back as `FetchError::Status`, a
    /// timeout as `FetchError::Timeout`; no retry in either case.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` variant depending on the failure mode
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.rate_limiter.until_ready().await;

        let full_url = if let Some(base) = &self.base_url {
            format!("{base}{url}")
        } else {
            url.to_string()
        };

        let response = self.client.get(&full_url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
