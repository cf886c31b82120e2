use serde::{Deserialize, Serialize};

/// One business listing as returned by the directory search
///
/// The directory returns many more fields (coordinates, price, categories,
/// …); everything this crate does not consume is kept verbatim in `extra`,
/// so callers can reach the full payload without this crate modeling it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Business {
    /// Canonical directory identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Public page for the business (the scrape path's natural seed)
    #[serde(default)]
    pub url: Option<String>,

    /// Every other field of the listing, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Extracts the `url` of every business from a raw search payload
///
/// Takes the JSON body of a search response as a string and returns the
/// businesses' page URLs in listing order. A business without a `url` field
/// makes the whole payload a decode error.
///
/// # Example
///
/// ```
/// use yelp_scout::model::business_urls;
///
/// let body = r#"{"total": 1, "businesses": [{"id": "x", "url": "https://www.yelp.com/biz/x"}]}"#;
/// let urls = business_urls(body).unwrap();
/// assert_eq!(urls, vec!["https://www.yelp.com/biz/x".to_string()]);
/// ```
pub fn business_urls(json: &str) -> Result<Vec<String>, serde_json::Error> {
    #[derive(Deserialize)]
    struct Payload {
        businesses: Vec<Entry>,
    }

    #[derive(Deserialize)]
    struct Entry {
        url: String,
    }

    let payload: Payload = serde_json::from_str(json)?;
    Ok(payload.businesses.into_iter().map(|b| b.url).collect())
}
