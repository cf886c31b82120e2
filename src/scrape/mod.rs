//! Review extraction from public listing pages
//!
//! This module covers the HTML side of review collection:
//! - Fetching listing pages over plain HTTP
//! - Parsing review markup via its microdata annotations
//! - Following pagination links until the chain ends

mod aggregator;
mod fetcher;
mod parser;

pub use aggregator::scrape_reviews;
pub use fetcher::{build_scrape_client, fetch_html};
pub use parser::{parse_review_page, ParsedReviewPage};
