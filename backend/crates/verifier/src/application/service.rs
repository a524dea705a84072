//! Challenge Session Service
//!
//! Owns the session store, the attestation verifier and the configuration,
//! and runs both protocol operations against them. Cloning is cheap and
//! every clone works on the same sessions, so this is also the axum state.

use crate::application::config::VerifierConfig;
use crate::application::issue_challenge::{IssueChallengeOutput, IssueChallengeUseCase};
use crate::application::verify_attestation::{
    VerifyAttestationInput, VerifyAttestationOutput, VerifyAttestationUseCase,
};
use crate::domain::repository::SessionRepository;
use crate::domain::services::AttestationVerifier;
use crate::error::VerifierResult;
use std::sync::Arc;

pub struct ChallengeSessionService<S, V>
where
    S: SessionRepository + Send + Sync + 'static,
    V: AttestationVerifier + Send + Sync + 'static,
{
    store: Arc<S>,
    verifier: Arc<V>,
    config: Arc<VerifierConfig>,
}

impl<S, V> ChallengeSessionService<S, V>
where
    S: SessionRepository + Send + Sync + 'static,
    V: AttestationVerifier + Send + Sync + 'static,
{
    pub fn new(store: S, verifier: V, config: VerifierConfig) -> Self {
        tracing::debug!(
            claims_token_bytes = config.claims_token.len(),
            "Challenge session service constructed"
        );
        Self {
            store: Arc::new(store),
            verifier: Arc::new(verifier),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// GetParams
    pub async fn issue_challenge(&self) -> VerifierResult<IssueChallengeOutput> {
        IssueChallengeUseCase::new(self.store.clone(), self.config.clone())
            .execute()
            .await
    }

    /// Verify
    pub async fn verify_attestation(
        &self,
        input: VerifyAttestationInput,
    ) -> VerifierResult<VerifyAttestationOutput> {
        VerifyAttestationUseCase::new(
            self.store.clone(),
            self.verifier.clone(),
            self.config.clone(),
        )
        .execute(input)
        .await
    }
}

impl<S, V> Clone for ChallengeSessionService<S, V>
where
    S: SessionRepository + Send + Sync + 'static,
    V: AttestationVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            verifier: self.verifier.clone(),
            config: self.config.clone(),
        }
    }
}
