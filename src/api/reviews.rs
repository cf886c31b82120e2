//! Review retrieval for a resolved business
//!
//! The reviews endpoint returns at most three review excerpts per business no
//! matter how many the listing holds, and offers no pagination. One call per
//! business therefore retrieves everything the API will give out; the
//! listing-wide count still arrives in the `total` field.

use serde::Deserialize;

use crate::api::{api_request, resolve_business, ApiClient, MatchOutcome, MatchQuery};
use crate::credential::ApiKey;
use crate::model::Review;

/// Wire shape of a reviews response
#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    reviews: Vec<ApiReview>,
    total: u64,
}

/// Wire shape of one review record
#[derive(Debug, Deserialize)]
struct ApiReview {
    rating: f64,
    text: String,
    time_created: String,
    user: ReviewUser,
}

#[derive(Debug, Deserialize)]
struct ReviewUser {
    name: String,
}

impl From<ApiReview> for Review {
    fn from(api: ApiReview) -> Self {
        Review {
            author: api.user.name,
            rating: api.rating,
            date: api.time_created,
            text: api.text,
        }
    }
}

/// Reviews available for one business, with the listing-wide count
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessReviews {
    /// The review excerpts the API returned, at most three
    pub reviews: Vec<Review>,

    /// Total number of reviews the listing holds
    pub total: u64,
}

/// Fetches the available reviews for a business id
///
/// # Arguments
///
/// * `client` - The API client
/// * `key` - API key for authorization
/// * `business_id` - Id previously obtained from search or identity matching
///
/// # Returns
///
/// * `Ok(BusinessReviews)` - Up to three reviews plus the listing total
/// * `Err(ScoutError)` - The call failed or the body did not decode
pub async fn fetch_reviews(
    client: &ApiClient,
    key: &ApiKey,
    business_id: &str,
) -> crate::Result<BusinessReviews> {
    let suffix = format!("/{}/reviews", business_id);
    let request = api_request(client.base_url(), &suffix, key, &[])?;

    let response: ReviewsResponse = client.get_json(&request).await?;
    tracing::debug!(
        business_id,
        returned = response.reviews.len(),
        total = response.total,
        "fetched reviews"
    );

    Ok(BusinessReviews {
        reviews: response.reviews.into_iter().map(Review::from).collect(),
        total: response.total,
    })
}

/// Resolves a business identity and fetches its reviews in one step
///
/// # Arguments
///
/// * `client` - The API client
/// * `key` - API key for authorization
/// * `query` - The identity to resolve
///
/// # Returns
///
/// * `Ok(Some(BusinessReviews))` - The identity matched and reviews were
///   fetched
/// * `Ok(None)` - The identity did not match any business
/// * `Err(ScoutError)` - Either call failed
pub async fn reviews_for_business(
    client: &ApiClient,
    key: &ApiKey,
    query: &MatchQuery,
) -> crate::Result<Option<BusinessReviews>> {
    match resolve_business(client, key, query).await? {
        MatchOutcome::Found { id } => Ok(Some(fetch_reviews(client, key, &id).await?)),
        MatchOutcome::NotFound { .. } => Ok(None),
    }
}
