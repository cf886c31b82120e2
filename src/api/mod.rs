//! Yelp Fusion API access
//!
//! This module contains everything that talks JSON to the service:
//! - Request construction with bearer-token headers
//! - The shared HTTP client and response decoding
//! - Paginated business search and full-listing collection
//! - Business identity resolution via the matches endpoint
//! - Review retrieval for a resolved business

mod executor;
mod matches;
mod request;
mod reviews;
mod search;

pub use executor::ApiClient;
pub use matches::{resolve_business, MatchOutcome, MatchQuery, NO_MATCH_CODE};
pub use request::{api_request, ApiRequest, API_BASE_URL};
pub use reviews::{fetch_reviews, reviews_for_business, BusinessReviews};
pub use search::{
    all_restaurants, restaurant_page_plan, search, RESTAURANTS_CATEGORY, SEARCH_PAGE_SIZE,
};
