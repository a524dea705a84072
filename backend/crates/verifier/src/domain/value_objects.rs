//! Domain Value Objects
//!
//! Immutable value types for the verifier domain.

use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
use std::borrow::Borrow;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Nonce length in bytes
pub const NONCE_LEN: usize = 32;

/// Connection (session) identifier, the decimal form of a process-wide sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnId(String);

impl ConnId {
    pub fn from_sequence(seq: u64) -> Self {
        Self(seq.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by ConnId be queried with the raw request string
impl Borrow<str> for ConnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Challenge nonce bound to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    /// Draw a fresh nonce from the OS CSPRNG
    pub fn generate() -> Self {
        Self(platform::crypto::random_array())
    }

    pub fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

/// Opaque claims token handed out on successful verification.
///
/// Cloning shares the underlying bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct ClaimsToken(Arc<[u8]>);

impl ClaimsToken {
    /// Fake RSA-signed JWT shipped with the crate
    pub fn embedded() -> Self {
        Self::from_bytes(include_bytes!("../../fixtures/fake_rsa_token.txt").as_slice())
    }

    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// Load a token from disk; an empty file is refused
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(AppError::new(
                ErrorKind::FailedPrecondition,
                format!("claims token file {} is empty", path.display()),
            ));
        }
        Ok(Self::from_bytes(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ClaimsToken {
    fn default() -> Self {
        Self::embedded()
    }
}

impl fmt::Debug for ClaimsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClaimsToken({} bytes)", self.0.len())
    }
}
