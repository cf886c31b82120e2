//! Data records shared between the API client and the scraper
//!
//! # Components
//!
//! - `Business`: one directory listing; everything beyond the modeled
//!   identity fields is carried as pass-through data
//! - `Review`: one review, whether it came from the API or from scraped
//!   markup

mod business;
mod review;

// Re-export main types
pub use business::{business_urls, Business};
pub use review::Review;
