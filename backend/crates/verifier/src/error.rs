//! Verifier Error Types
//!
//! Verifier-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Messages are part of the wire contract
//! and match what existing test clients expect.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type VerifierResult<T> = Result<T, VerifierError>;

#[derive(Debug, Error)]
pub enum VerifierError {
    /// Verify was called with an empty conn_id
    #[error("VerifyRequest is missing conn_id")]
    MissingConnId,

    /// conn_id was never issued (or has been evicted)
    #[error("conn_id was not found")]
    UnknownConnId,

    /// Verify was called without an attestation, or with an empty one
    #[error("VerifyRequest is missing attestation")]
    MissingAttestation,

    /// The plugged-in attestation verifier refused the evidence
    #[error("Attestation rejected: {0}")]
    AttestationRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VerifierError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifierError::MissingConnId
            | VerifierError::UnknownConnId
            | VerifierError::MissingAttestation => ErrorKind::InvalidArgument,
            VerifierError::AttestationRejected(_) => ErrorKind::PermissionDenied,
            VerifierError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            VerifierError::Internal(msg) => {
                tracing::error!(message = %msg, "Verifier internal error");
            }
            VerifierError::AttestationRejected(reason) => {
                tracing::warn!(reason = %reason, "Attestation rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Verify request refused");
            }
        }
    }
}

impl From<VerifierError> for AppError {
    fn from(err: VerifierError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for VerifierError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
