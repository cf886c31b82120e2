//! Integration tests for multi-page review scraping

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yelp_scout::config::ScrapeConfig;
use yelp_scout::scrape::{build_scrape_client, scrape_reviews};
use yelp_scout::ScoutError;

fn create_test_client() -> reqwest::Client {
    let config = ScrapeConfig { timeout_secs: 5 };
    build_scrape_client(&config).expect("Failed to build scrape client")
}

/// One annotated review node as a listing page would carry it
fn review_node(author: &str, rating: &str, date: &str, text: &str) -> String {
    format!(
        r#"<div itemprop="review">
            <meta itemprop="author" content="{}">
            <div itemprop="reviewRating">
                <meta itemprop="ratingValue" content="{}">
            </div>
            <meta itemprop="datePublished" content="{}">
            <p>{}</p>
        </div>"#,
        author, rating, date, text
    )
}

/// Wraps review nodes in a page, announcing a next page when given one
fn page_html(reviews: &str, next_href: Option<&str>) -> String {
    let next_link = match next_href {
        Some(href) => format!(r#"<link rel="next" href="{}">"#, href),
        None => String::new(),
    };

    format!(
        "<html><head><title>Reviews</title>{}</head><body>{}</body></html>",
        next_link, reviews
    )
}

#[tokio::test]
async fn test_follows_next_links_until_chain_ends() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let page1 = page_html(
        &format!(
            "{}{}",
            review_node("Ana A.", "5.0", "2020-01-01", "One."),
            review_node("Ben B.", "4.0", "2020-01-02", "Two.")
        ),
        // Absolute continuation link
        Some(&format!("{}/biz/the-spot?start=20", base_url)),
    );
    let page2 = page_html(
        &format!(
            "{}{}",
            review_node("Cam C.", "3.0", "2020-01-03", "Three."),
            review_node("Dee D.", "2.0", "2020-01-04", "Four.")
        ),
        // Relative continuation link, resolved against the page URL
        Some("?start=40"),
    );
    let page3 = page_html(
        &format!(
            "{}{}",
            review_node("Eli E.", "1.0", "2020-01-05", "Five."),
            review_node("Fay F.", "5.0", "2020-01-06", "Six.")
        ),
        None,
    );

    // Mount the query-specific pages first: the bare-path mock would match
    // those requests too, and wiremock picks the first mounted match
    Mock::given(method("GET"))
        .and(path("/biz/the-spot"))
        .and(query_param("start", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page3))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/biz/the-spot"))
        .and(query_param("start", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/biz/the-spot"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let reviews = scrape_reviews(&client, &format!("{}/biz/the-spot", base_url))
        .await
        .expect("Scrape failed");

    let authors: Vec<&str> = reviews.iter().map(|r| r.author.as_str()).collect();
    assert_eq!(
        authors,
        vec!["Ana A.", "Ben B.", "Cam C.", "Dee D.", "Eli E.", "Fay F."]
    );

    // Wiremock verifies that each page was fetched exactly once
}

#[tokio::test]
async fn test_single_page_without_next_link() {
    let mock_server = MockServer::start().await;

    let page = page_html(
        &review_node("Solo S.", "4.5", "2021-06-15", "Only page."),
        None,
    );

    Mock::given(method("GET"))
        .and(path("/biz/one-pager"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let reviews = scrape_reviews(&client, &format!("{}/biz/one-pager", mock_server.uri()))
        .await
        .expect("Scrape failed");

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author, "Solo S.");
    assert_eq!(reviews[0].rating, 4.5);
}

#[tokio::test]
async fn test_malformed_node_is_skipped_but_chain_continues() {
    let mock_server = MockServer::start().await;

    let broken = r#"<div itemprop="review">
        <meta itemprop="author" content="No Rating">
        <p>This node has no rating.</p>
    </div>"#;

    let page1 = page_html(
        &format!(
            "{}{}",
            broken,
            review_node("Good G.", "4.0", "2021-01-01", "Kept.")
        ),
        Some("?start=20"),
    );
    let page2 = page_html(
        &review_node("Next N.", "3.0", "2021-01-02", "Second page."),
        None,
    );

    Mock::given(method("GET"))
        .and(path("/biz/mixed"))
        .and(query_param("start", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/biz/mixed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let reviews = scrape_reviews(&client, &format!("{}/biz/mixed", mock_server.uri()))
        .await
        .expect("Scrape failed");

    let authors: Vec<&str> = reviews.iter().map(|r| r.author.as_str()).collect();
    assert_eq!(authors, vec!["Good G.", "Next N."]);
}

#[tokio::test]
async fn test_page_without_review_markup_yields_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/biz/barren"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>Nothing to see.</p></body></html>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let reviews = scrape_reviews(&client, &format!("{}/biz/barren", mock_server.uri()))
        .await
        .expect("Scrape failed");

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_error_status_body_is_still_parsed() {
    let mock_server = MockServer::start().await;

    // Listing sites serve review markup even on interstitial error pages;
    // the body is parsed regardless of status
    let page = page_html(
        &review_node("Err E.", "2.0", "2021-03-03", "Still here."),
        None,
    );

    Mock::given(method("GET"))
        .and(path("/biz/flaky"))
        .respond_with(ResponseTemplate::new(404).set_body_string(page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let reviews = scrape_reviews(&client, &format!("{}/biz/flaky", mock_server.uri()))
        .await
        .expect("Scrape failed");

    assert_eq!(reviews.len(), 1);
}

#[tokio::test]
async fn test_redirected_page_is_followed() {
    let mock_server = MockServer::start().await;

    // Renamed listings redirect to their new slug
    let page = page_html(
        &review_node("Moved M.", "4.0", "2022-02-02", "New address."),
        None,
    );
    let moved_to = format!("{}/biz/new-name", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/biz/old-name"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", moved_to.as_str()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/biz/new-name"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let reviews = scrape_reviews(&client, &format!("{}/biz/old-name", mock_server.uri()))
        .await
        .expect("Scrape failed");

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author, "Moved M.");
}

#[tokio::test]
async fn test_invalid_seed_url_is_rejected() {
    let client = create_test_client();
    let result = scrape_reviews(&client, "not a url").await;

    match result {
        Err(ScoutError::UrlParse(_)) => {}
        other => panic!("Expected URL parse error, got {:?}", other),
    }
}
