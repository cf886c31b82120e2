//! Integration tests for the directory client
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full call flows end-to-end: paginated search, identity matching plus
//! review fetching, and multi-page scraping.

mod scrape_reviews;
