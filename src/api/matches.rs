//! Business identity resolution
//!
//! The matches endpoint turns a real-world identity (name plus address
//! fields) into the service's business id. A failed match is an expected
//! outcome, not an error: the service reports it in-band with a code and
//! description, and callers decide what to do with it.

use serde::Deserialize;

use crate::api::{api_request, ApiClient};
use crate::credential::ApiKey;

/// Code used when the service returns no candidates and no error payload
pub const NO_MATCH_CODE: &str = "NO_MATCH";

/// Real-world identity of a business to resolve
///
/// The address line may be empty; the service still matches on the remaining
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    /// Business name, e.g. `"Jibaritos Y Mas"`
    pub name: String,

    /// Street address line, possibly empty
    pub address: String,

    /// City name
    pub city: String,

    /// Two-letter state code
    pub state: String,

    /// Two-letter country code
    pub country: String,
}

/// Result of an identity resolution attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The service matched the identity to a business
    Found {
        /// The matched business id
        id: String,
    },

    /// No business matched
    NotFound {
        /// Service-reported error code, or [`NO_MATCH_CODE`] when the service
        /// simply returned no candidates
        code: String,
        /// Human-readable explanation
        description: String,
    },
}

/// Wire shape of a matches response
///
/// Success responses carry `businesses`; failure responses carry `error`.
/// Both are optional here so either shape decodes.
#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(default)]
    businesses: Vec<MatchCandidate>,
    error: Option<ApiErrorPayload>,
}

#[derive(Debug, Deserialize)]
struct MatchCandidate {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    code: String,
    description: String,
}

/// Resolves a business identity to its id
///
/// # Arguments
///
/// * `client` - The API client
/// * `key` - API key for authorization
/// * `query` - The identity to resolve
///
/// # Returns
///
/// * `Ok(MatchOutcome::Found)` - The id of the best candidate
/// * `Ok(MatchOutcome::NotFound)` - The service reported an error payload or
///   returned no candidates
/// * `Err(ScoutError)` - The call itself failed
pub async fn resolve_business(
    client: &ApiClient,
    key: &ApiKey,
    query: &MatchQuery,
) -> crate::Result<MatchOutcome> {
    let request = api_request(
        client.base_url(),
        "/matches",
        key,
        &[
            ("name", query.name.as_str()),
            ("address1", query.address.as_str()),
            ("city", query.city.as_str()),
            ("state", query.state.as_str()),
            ("country", query.country.as_str()),
        ],
    )?;

    let response: MatchResponse = client.get_json(&request).await?;
    let outcome = outcome_from(response);

    match &outcome {
        MatchOutcome::Found { id } => {
            tracing::debug!(name = %query.name, %id, "resolved business identity");
        }
        MatchOutcome::NotFound { code, description } => {
            tracing::warn!(name = %query.name, %code, %description, "identity match failed");
        }
    }

    Ok(outcome)
}

/// Interprets a decoded matches response
///
/// An error payload always means not-found, even when candidates are present
/// alongside it; otherwise the first candidate is taken as the match.
fn outcome_from(response: MatchResponse) -> MatchOutcome {
    if let Some(payload) = response.error {
        return MatchOutcome::NotFound {
            code: payload.code,
            description: payload.description,
        };
    }

    match response.businesses.into_iter().next() {
        Some(candidate) => MatchOutcome::Found { id: candidate.id },
        None => MatchOutcome::NotFound {
            code: NO_MATCH_CODE.to_string(),
            description: "no business matched the supplied identity".to_string(),
        },
    }
}
