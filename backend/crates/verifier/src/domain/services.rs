//! Domain Services
//!
//! Audience binding and the attestation verification seam.

use crate::domain::entities::Attestation;
use crate::domain::value_objects::{ConnId, Nonce};
use crate::error::VerifierResult;

/// Audience prefix used by the reference fake verifier
pub const DEFAULT_AUDIENCE_PREFIX: &str = "https://fake_attestation_verifier/v0/conn_id/";

/// Build the audience a client must put in its attestation for `conn_id`
pub fn audience_for(prefix: &str, conn_id: &ConnId) -> String {
    format!("{prefix}{conn_id}")
}

/// Checks attestation evidence against the nonce issued for its session.
///
/// Return `Ok(())` to accept; reject with
/// [`VerifierError::AttestationRejected`](crate::error::VerifierError::AttestationRejected).
#[trait_variant::make(AttestationVerifier: Send)]
pub trait LocalAttestationVerifier {
    async fn verify(&self, nonce: &Nonce, attestation: &Attestation) -> VerifierResult<()>;
}

/// Verifier that accepts any evidence. This is what makes the service a fake.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllVerifier;

impl AttestationVerifier for AcceptAllVerifier {
    async fn verify(&self, _nonce: &Nonce, _attestation: &Attestation) -> VerifierResult<()> {
        Ok(())
    }
}
