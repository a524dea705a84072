//! Application Configuration
//!
//! Configuration for the verifier application layer.

use crate::domain::services::{DEFAULT_AUDIENCE_PREFIX, audience_for};
use crate::domain::value_objects::{ClaimsToken, ConnId};
use kernel::error::app_error::AppResult;
use std::path::Path;

/// Verifier application configuration
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Prefix the conn_id is appended to when building the audience
    pub audience_prefix: String,
    /// Token returned by every successful Verify
    pub claims_token: ClaimsToken,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            audience_prefix: DEFAULT_AUDIENCE_PREFIX.to_string(),
            claims_token: ClaimsToken::embedded(),
        }
    }
}

impl VerifierConfig {
    /// Replace the embedded claims token with the contents of `path`
    pub fn with_claims_token_file(self, path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self {
            claims_token: ClaimsToken::load(path)?,
            ..self
        })
    }

    pub fn audience_for(&self, conn_id: &ConnId) -> String {
        audience_for(&self.audience_prefix, conn_id)
    }
}
