//! Page fetching for the review scraper
//!
//! Listing pages are served to browsers, so this client follows redirects the
//! way a browser would. That differs from the API client, which talks to a
//! fixed endpoint and never expects to be redirected.

use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::config::ScrapeConfig;
use crate::ScoutError;

/// User agent sent with every page request
const USER_AGENT: &str = concat!("yelp-scout/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for page fetching
///
/// # Arguments
///
/// * `config` - Scraper timeout settings
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_scrape_client(config: &ScrapeConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and returns its body
///
/// Non-success statuses are logged but the body is still returned; a page
/// with no review markup simply parses to nothing.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page to fetch
///
/// # Returns
///
/// * `Ok(String)` - The page body
/// * `Err(ScoutError)` - Timeout or transport failure
pub async fn fetch_html(client: &Client, url: &Url) -> crate::Result<String> {
    let target = url.to_string();

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ScoutError::request_failure(&target, source))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %target, status = status.as_u16(), "page returned non-success status");
    }

    response
        .text()
        .await
        .map_err(|source| ScoutError::request_failure(&target, source))
}
