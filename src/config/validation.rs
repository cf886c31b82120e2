use crate::config::types::{ApiConfig, Config, ScrapeConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_scrape_config(&config.scrape)?;
    Ok(())
}

/// Validates the API client configuration
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    validate_timeout(config.timeout_secs)?;

    // Zero delay is legal; anything over a minute is treated as a unit mistake
    if config.page_delay_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "page-delay-ms must be <= 60000, got {}",
            config.page_delay_ms
        )));
    }

    Ok(())
}

/// Validates the scraper configuration
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    validate_timeout(config.timeout_secs)
}

/// Validates a per-request timeout value
fn validate_timeout(timeout_secs: u64) -> Result<(), ConfigError> {
    if timeout_secs < 1 || timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            timeout_secs
        )));
    }
    Ok(())
}
