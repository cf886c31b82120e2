//! Multi-page review collection

use reqwest::Client;
use url::Url;

use crate::model::Review;
use crate::scrape::{fetch_html, parse_review_page};

/// Collects every review reachable from a listing page
///
/// Starts at the seed page and follows the announced next-page link until a
/// page stops announcing one. Reviews are concatenated in page order, so the
/// result preserves the site's presentation order across the whole chain.
///
/// # Arguments
///
/// * `client` - HTTP client from [`build_scrape_client`](crate::scrape::build_scrape_client)
/// * `seed_url` - Listing page to start from
///
/// # Returns
///
/// * `Ok(Vec<Review>)` - All extracted reviews in page order
/// * `Err(ScoutError)` - The seed URL does not parse, or a page fetch failed;
///   reviews from earlier pages are discarded
pub async fn scrape_reviews(client: &Client, seed_url: &str) -> crate::Result<Vec<Review>> {
    let mut current = Url::parse(seed_url)?;
    let mut reviews = Vec::new();
    let mut pages = 0;

    loop {
        let html = fetch_html(client, &current).await?;
        let parsed = parse_review_page(&html, &current);
        pages += 1;

        tracing::debug!(
            url = %current,
            page = pages,
            reviews = parsed.reviews.len(),
            "parsed review page"
        );
        reviews.extend(parsed.reviews);

        match parsed.next_url {
            Some(next) => current = next,
            None => break,
        }
    }

    tracing::info!(pages, collected = reviews.len(), "review scrape complete");
    Ok(reviews)
}

// Chain-following behavior is covered with a mock server in the integration
// tests; the parsing rules have their own unit tests next door.
