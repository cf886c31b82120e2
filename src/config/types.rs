use crate::api::API_BASE_URL;
use crate::throttle::DEFAULT_PAGE_DELAY_MS;
use serde::Deserialize;

/// Main configuration structure for Yelp-Scout
///
/// Every field has a default, so a missing or partial configuration file is
/// fine; an absent file means `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub scrape: ScrapeConfig,
}

/// Directory API client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the businesses API (overridable so tests can point at a
    /// local mock server)
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Pause after each page call during bulk search (milliseconds)
    #[serde(rename = "page-delay-ms")]
    pub page_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout_secs: 30,
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
        }
    }
}

/// Review-page scraper configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}
