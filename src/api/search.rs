//! Paginated business search
//!
//! The service caps each search response at a fixed page size, so collecting
//! a whole listing takes one probe call to learn the total plus one call per
//! page. Page requests are planned up front from the probed total and then
//! executed in order with a fixed pause between them.

use serde::Deserialize;
use url::Url;

use crate::api::{api_request, ApiClient, ApiRequest};
use crate::credential::ApiKey;
use crate::model::Business;
use crate::throttle::Pacer;

/// Records per search page, which is also the offset stride
pub const SEARCH_PAGE_SIZE: u64 = 20;

/// Category filter applied to bulk restaurant collection
pub const RESTAURANTS_CATEGORY: &str = "restaurants";

/// Wire shape of a search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u64,
    #[serde(default)]
    businesses: Vec<Business>,
}

/// Runs a single search call and returns the reported total with one page of
/// records
///
/// This is the probe shape: only the location and offset are sent, no page
/// size and no category filter. The reported total covers the whole listing,
/// not just the returned page.
///
/// # Arguments
///
/// * `client` - The API client
/// * `key` - API key for authorization
/// * `location` - Free-text location, e.g. `"Chicago"`
/// * `offset` - Zero-based record offset
///
/// # Returns
///
/// * `Ok((total, businesses))` - Listing-wide total and the returned page
/// * `Err(ScoutError)` - The call failed or the body did not decode
pub async fn search(
    client: &ApiClient,
    key: &ApiKey,
    location: &str,
    offset: u64,
) -> crate::Result<(u64, Vec<Business>)> {
    let offset_value = offset.to_string();
    let request = api_request(
        client.base_url(),
        "/search",
        key,
        &[("location", location), ("offset", &offset_value)],
    )?;

    let response: SearchResponse = client.get_json(&request).await?;
    Ok((response.total, response.businesses))
}

/// Plans the page requests needed to cover `total` records
///
/// Offsets run 0, 20, 40, ... while they stay below the total, so a total of
/// zero yields an empty plan and any positive total yields `ceil(total / 20)`
/// requests. Each planned request asks for a full page and filters to
/// restaurants. Planning is pure; no request is sent here.
///
/// # Arguments
///
/// * `base_url` - Root of the business endpoints
/// * `key` - API key for authorization
/// * `location` - Free-text location the plan covers
/// * `total` - Record count reported by the probe call
///
/// # Returns
///
/// * `Ok(Vec<ApiRequest>)` - Page requests in ascending offset order
/// * `Err(ScoutError)` - The base URL and suffix do not form a valid URL
pub fn restaurant_page_plan(
    base_url: &Url,
    key: &ApiKey,
    location: &str,
    total: u64,
) -> crate::Result<Vec<ApiRequest>> {
    let limit_value = SEARCH_PAGE_SIZE.to_string();
    let mut plan = Vec::new();

    let mut offset = 0;
    while offset < total {
        let offset_value = offset.to_string();
        plan.push(api_request(
            base_url,
            "/search",
            key,
            &[
                ("location", location),
                ("limit", &limit_value),
                ("offset", &offset_value),
                ("categories", RESTAURANTS_CATEGORY),
            ],
        )?);

        offset += SEARCH_PAGE_SIZE;
    }

    Ok(plan)
}

/// Collects every restaurant record for a location
///
/// # Flow
///
/// 1. Probe the search endpoint once to learn the listing total
/// 2. Plan one page request per 20 records
/// 3. Execute the plan in order, pausing after each page call
///
/// Records are concatenated in page order, so the service's ranking is
/// preserved across pages. The total is probed once and never re-checked: if
/// the listing shrinks while pages are being fetched, later pages simply come
/// back short and the result holds whatever the service actually returned.
///
/// # Arguments
///
/// * `client` - The API client
/// * `key` - API key for authorization
/// * `location` - Free-text location to collect
/// * `pacer` - Pause applied after each page call
///
/// # Returns
///
/// * `Ok(Vec<Business>)` - All collected records in listing order
/// * `Err(ScoutError)` - A call failed; records from earlier pages are
///   discarded
pub async fn all_restaurants(
    client: &ApiClient,
    key: &ApiKey,
    location: &str,
    pacer: &Pacer,
) -> crate::Result<Vec<Business>> {
    let (total, _) = search(client, key, location, 0).await?;
    tracing::info!(location, total, "starting bulk search");

    let plan = restaurant_page_plan(client.base_url(), key, location, total)?;
    let mut businesses = Vec::new();

    for (index, request) in plan.iter().enumerate() {
        let page: SearchResponse = client.get_json(request).await?;
        tracing::debug!(
            page = index + 1,
            pages = plan.len(),
            records = page.businesses.len(),
            "fetched search page"
        );

        businesses.extend(page.businesses);
        pacer.pause().await;
    }

    tracing::info!(location, collected = businesses.len(), "bulk search complete");
    Ok(businesses)
}
