//! API request construction

use std::collections::BTreeMap;
use url::Url;

use crate::credential::ApiKey;

/// Base URL for the business endpoints of the Fusion API
pub const API_BASE_URL: &str = "https://api.yelp.com/v3/businesses";

/// A fully described API call: endpoint, headers, and query parameters
///
/// Requests are plain data. Building one performs no I/O, which keeps
/// pagination planning testable without a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Endpoint to call, without query parameters
    pub url: Url,

    /// Headers to send, including authorization
    pub headers: BTreeMap<String, String>,

    /// Query parameters to append to the URL
    pub params: BTreeMap<String, String>,
}

/// Builds an authorized request against a business endpoint
///
/// The endpoint is formed by appending `suffix` to the base URL, so
/// `"/search"` targets the search endpoint and `"/{id}/reviews"` targets the
/// reviews endpoint for one business. Credentials travel in an
/// `Authorization: Bearer` header; they never appear in the URL.
///
/// # Arguments
///
/// * `base_url` - Root of the business endpoints
/// * `suffix` - Path fragment to append, starting with `/`
/// * `key` - API key for the authorization header
/// * `params` - Query parameters as name/value pairs
///
/// # Returns
///
/// * `Ok(ApiRequest)` - The assembled request
/// * `Err(url::ParseError)` - The base URL and suffix do not form a valid URL
///
/// # Example
///
/// ```
/// use url::Url;
/// use yelp_scout::credential::ApiKey;
/// use yelp_scout::api::{api_request, API_BASE_URL};
///
/// let base = Url::parse(API_BASE_URL).unwrap();
/// let key = ApiKey::new("secret".to_string());
/// let request = api_request(&base, "/search", &key, &[("location", "Chicago")]).unwrap();
/// assert_eq!(request.url.path(), "/v3/businesses/search");
/// ```
pub fn api_request(
    base_url: &Url,
    suffix: &str,
    key: &ApiKey,
    params: &[(&str, &str)],
) -> Result<ApiRequest, url::ParseError> {
    let target = format!("{}{}", base_url.as_str().trim_end_matches('/'), suffix);
    let url = Url::parse(&target)?;

    let mut headers = BTreeMap::new();
    headers.insert(
        "Authorization".to_string(),
        format!("Bearer {}", key.as_str()),
    );

    let params = params
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Ok(ApiRequest {
        url,
        headers,
        params,
    })
}
