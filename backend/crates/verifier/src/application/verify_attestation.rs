//! Verify Attestation Use Case (Verify)

use crate::application::config::VerifierConfig;
use crate::domain::entities::Attestation;
use crate::domain::repository::SessionRepository;
use crate::domain::services::AttestationVerifier;
use crate::domain::value_objects::ClaimsToken;
use crate::error::{VerifierError, VerifierResult};
use std::sync::Arc;

/// Input DTO for verify attestation
#[derive(Debug, Clone, Default)]
pub struct VerifyAttestationInput {
    pub conn_id: String,
    pub attestation: Option<Attestation>,
}

/// Output DTO for verify attestation
#[derive(Debug, Clone)]
pub struct VerifyAttestationOutput {
    pub claims_token: ClaimsToken,
}

/// Verify Attestation Use Case
pub struct VerifyAttestationUseCase<S, V>
where
    S: SessionRepository,
    V: AttestationVerifier,
{
    session_repo: Arc<S>,
    verifier: Arc<V>,
    config: Arc<VerifierConfig>,
}

impl<S, V> VerifyAttestationUseCase<S, V>
where
    S: SessionRepository,
    V: AttestationVerifier,
{
    pub fn new(session_repo: Arc<S>, verifier: Arc<V>, config: Arc<VerifierConfig>) -> Self {
        Self {
            session_repo,
            verifier,
            config,
        }
    }

    /// Checks run in a fixed order and the first failure is returned.
    /// Sessions are left in place whatever the outcome.
    pub async fn execute(
        &self,
        input: VerifyAttestationInput,
    ) -> VerifierResult<VerifyAttestationOutput> {
        if input.conn_id.is_empty() {
            tracing::warn!("Verify called without conn_id");
            return Err(VerifierError::MissingConnId);
        }

        let nonce = self
            .session_repo
            .lookup(&input.conn_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(conn_id = %input.conn_id, "Unknown conn_id");
                VerifierError::UnknownConnId
            })?;

        let attestation = match input.attestation {
            Some(attestation) if !attestation.is_empty() => attestation,
            _ => {
                tracing::warn!(conn_id = %input.conn_id, "Verify called without attestation");
                return Err(VerifierError::MissingAttestation);
            }
        };

        self.verifier.verify(&nonce, &attestation).await?;

        tracing::info!(
            conn_id = %input.conn_id,
            quotes = attestation.quotes.len(),
            "Attestation accepted"
        );

        Ok(VerifyAttestationOutput {
            claims_token: self.config.claims_token.clone(),
        })
    }
}
