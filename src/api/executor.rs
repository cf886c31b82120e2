//! HTTP execution of API requests
//!
//! One client instance is shared across all API operations. Responses are
//! taken as text first and decoded separately, so transport failures and
//! malformed payloads surface as distinct errors.

use reqwest::{redirect::Policy, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::api::ApiRequest;
use crate::config::ApiConfig;
use crate::ScoutError;

/// User agent sent with every API request
const USER_AGENT: &str = concat!("yelp-scout/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one API base URL
///
/// # Example
///
/// ```no_run
/// use yelp_scout::config::ApiConfig;
/// use yelp_scout::api::ApiClient;
///
/// let client = ApiClient::new(&ApiConfig::default()).unwrap();
/// assert_eq!(client.base_url().host_str(), Some("api.yelp.com"));
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client from the API configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL and timeout settings
    ///
    /// # Returns
    ///
    /// * `Ok(ApiClient)` - Ready-to-use client
    /// * `Err(ScoutError)` - The base URL does not parse, or the underlying
    ///   client could not be constructed
    pub fn new(config: &ApiConfig) -> crate::Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::none()) // The API endpoints never redirect
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Returns the base URL this client targets
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Executes a request and decodes the JSON response body
    ///
    /// Non-success statuses do not short-circuit: the service reports
    /// conditions like a failed identity match inside the JSON body of a 4xx
    /// response, so the body is decoded either way and the caller interprets
    /// it.
    ///
    /// # Arguments
    ///
    /// * `request` - The request to execute
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The decoded response body
    /// * `Err(ScoutError)` - Timeout, transport failure, or a body that does
    ///   not decode as `T`
    pub async fn get_json<T: DeserializeOwned>(&self, request: &ApiRequest) -> crate::Result<T> {
        let url = request.url.to_string();

        let mut builder = self.http.get(request.url.clone()).query(&request.params);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| ScoutError::request_failure(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "API returned non-success status");
        }

        let body = response
            .text()
            .await
            .map_err(|source| ScoutError::request_failure(&url, source))?;

        serde_json::from_str(&body).map_err(|source| ScoutError::Decode {
            url: url.clone(),
            source,
        })
    }
}
