//! Credential handling for the directory API
//!
//! The Yelp Fusion API authenticates every call with a bearer token. The
//! token lives in a single-line key file; it is read once at startup and then
//! passed explicitly into every operation that needs it; there is no ambient
//! credential holder. Logs only ever see a fingerprint, never the token.

use crate::CredentialError;
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

/// An opaque Yelp Fusion API key
///
/// Immutable once loaded. `Debug` output is redacted so the token cannot leak
/// through error chains or log fields.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps an already-loaded token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for building an authorization header
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a short SHA-256 fingerprint of the token, safe to log
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..12].to_string()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(****{})", self.fingerprint())
    }
}

/// Reads the API key from a single-line file
///
/// All newline characters are stripped, so a trailing newline (or a file
/// saved with CRLF endings) does not corrupt the authorization header. An
/// empty result is an error.
///
/// # Arguments
///
/// * `path` - Path to the file containing the key
///
/// # Returns
///
/// * `Ok(ApiKey)` - The loaded key
/// * `Err(CredentialError)` - The file was unreadable or empty
pub fn read_api_key(path: &Path) -> Result<ApiKey, CredentialError> {
    let content = std::fs::read_to_string(path)?;
    let token = content.replace('\n', "").replace('\r', "");

    if token.is_empty() {
        return Err(CredentialError::Empty {
            path: path.display().to_string(),
        });
    }

    let key = ApiKey::new(token);
    tracing::info!(fingerprint = %key.fingerprint(), "API key loaded");
    Ok(key)
}
