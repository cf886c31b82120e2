//! Review extraction from listing-page markup
//!
//! Review data on listing pages is annotated with microdata: each review
//! lives in a `div` with `itemprop="review"`, and its fields sit on
//! descendant elements carrying their own `itemprop` markers. Pagination is
//! announced with a `<link rel="next">` element in the page head.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::model::Review;

/// Reviews extracted from one page, plus the link to the next page
#[derive(Debug, Clone)]
pub struct ParsedReviewPage {
    /// Reviews in document order
    pub reviews: Vec<Review>,

    /// Absolute URL of the next page, if the page announces one
    pub next_url: Option<Url>,
}

/// Parses one listing page into reviews and a continuation link
///
/// # Extraction Rules
///
/// Per review node (`div[itemprop="review"]`):
/// - author: `content` attribute of the descendant marked `itemprop="author"`
/// - rating: `content` attribute of the descendant marked
///   `itemprop="ratingValue"`, parsed as a float
/// - date: `content` attribute of the descendant marked
///   `itemprop="datePublished"`
/// - text: text of the first `<p>` descendant
///
/// A node missing any field, or carrying a rating that does not parse, is
/// skipped with a warning; its siblings are still extracted. A page with no
/// review markup parses to an empty list.
///
/// # Arguments
///
/// * `html` - The page markup
/// * `page_url` - URL the page was fetched from, for resolving a relative
///   continuation link
///
/// # Returns
///
/// The extracted reviews and the next-page URL, if any
///
/// # Example
///
/// ```
/// use url::Url;
/// use yelp_scout::scrape::parse_review_page;
///
/// let html = r#"<html><body>
///   <div itemprop="review">
///     <meta itemprop="author" content="Ella A.">
///     <meta itemprop="ratingValue" content="4.0">
///     <meta itemprop="datePublished" content="2016-08-29">
///     <p>Great jibaritos.</p>
///   </div>
/// </body></html>"#;
///
/// let page_url = Url::parse("https://www.yelp.com/biz/example").unwrap();
/// let parsed = parse_review_page(html, &page_url);
/// assert_eq!(parsed.reviews.len(), 1);
/// assert!(parsed.next_url.is_none());
/// ```
pub fn parse_review_page(html: &str, page_url: &Url) -> ParsedReviewPage {
    let document = Html::parse_document(html);

    let next_url = extract_next_link(&document, page_url);
    let reviews = extract_reviews(&document);

    ParsedReviewPage { reviews, next_url }
}

/// Extracts every well-formed review node from the document
fn extract_reviews(document: &Html) -> Vec<Review> {
    let mut reviews = Vec::new();

    if let Ok(review_selector) = Selector::parse("div[itemprop='review']") {
        for node in document.select(&review_selector) {
            match extract_review(node) {
                Ok(review) => reviews.push(review),
                Err(field) => {
                    tracing::warn!(field, "skipping review node with missing or malformed field");
                }
            }
        }
    }

    reviews
}

/// Extracts one review from its node
///
/// Returns the name of the first missing or malformed field on failure.
fn extract_review(node: ElementRef) -> Result<Review, &'static str> {
    let author = itemprop_content(&node, "author").ok_or("author")?;

    let rating = itemprop_content(&node, "ratingValue")
        .ok_or("ratingValue")?
        .parse::<f64>()
        .map_err(|_| "ratingValue")?;

    let date = itemprop_content(&node, "datePublished").ok_or("datePublished")?;

    let text = first_paragraph_text(&node).ok_or("text")?;

    Ok(Review {
        author,
        rating,
        date,
        text,
    })
}

/// Reads the `content` attribute of the first descendant carrying the given
/// `itemprop` marker
fn itemprop_content(node: &ElementRef, prop: &str) -> Option<String> {
    let selector = Selector::parse(&format!("[itemprop='{}']", prop)).ok()?;

    node.select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|value| value.to_string())
}

/// Collects the text of the first `<p>` descendant
fn first_paragraph_text(node: &ElementRef) -> Option<String> {
    let selector = Selector::parse("p").ok()?;

    node.select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Finds the next-page link and resolves it against the page URL
///
/// A link that does not resolve to a valid URL ends the chain; it is logged
/// and treated as absent.
fn extract_next_link(document: &Html, page_url: &Url) -> Option<Url> {
    let selector = Selector::parse("link[rel='next']").ok()?;

    let href = document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))?;

    match page_url.join(href.trim()) {
        Ok(next_url) => Some(next_url),
        Err(error) => {
            tracing::warn!(href, %error, "ignoring unparseable next-page link");
            None
        }
    }
}
