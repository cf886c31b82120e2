use serde::{Deserialize, Serialize};

/// One review of a business
///
/// Produced by both retrieval paths: the API path maps the service's review
/// shape into this record, the scrape path extracts it from markup. The date
/// is kept as the string the source supplied (`2016-08-29 00:41:13` from the
/// API, `2016-08-29` from markup); nothing in this crate computes with it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Review {
    /// Review author's display name
    pub author: String,

    /// Star rating, e.g. 4.0
    pub rating: f64,

    /// Publication date as supplied by the source
    pub date: String,

    /// Free-text body
    pub text: String,
}
