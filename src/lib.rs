//! Yelp-Scout: a thin Yelp Fusion client with a scraping fallback
//!
//! This crate talks to the Yelp Fusion business directory: it collects every
//! restaurant listed for a location through the paginated search endpoint,
//! resolves a business id from fuzzy attributes, and fetches the (at most
//! three) reviews the API exposes. Independently, it can aggregate reviews by
//! scraping rendered review pages and following `rel=next` links.

pub mod api;
pub mod config;
pub mod credential;
pub mod model;
pub mod scrape;
pub mod throttle;

use thiserror::Error;

/// Main error type for Yelp-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Transport error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Credential-specific errors
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to read key file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Key file {path} is empty")]
    Empty { path: String },
}

impl ScoutError {
    /// Classifies a failed request as a timeout or a transport error
    pub(crate) fn request_failure(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Result type alias for Yelp-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use api::{
    all_restaurants, fetch_reviews, resolve_business, reviews_for_business, ApiClient, ApiRequest,
    BusinessReviews, MatchOutcome, MatchQuery,
};
pub use config::Config;
pub use credential::{read_api_key, ApiKey};
pub use model::{Business, Review};
pub use scrape::scrape_reviews;
pub use throttle::Pacer;
