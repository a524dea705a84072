//! Issue Challenge Use Case (GetParams)

use crate::application::config::VerifierConfig;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{ConnId, Nonce};
use crate::error::VerifierResult;
use std::sync::Arc;

/// Output DTO for issue challenge
#[derive(Debug, Clone)]
pub struct IssueChallengeOutput {
    pub conn_id: ConnId,
    pub nonce: Nonce,
    pub audience: String,
}

/// Issue Challenge Use Case
pub struct IssueChallengeUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<VerifierConfig>,
}

impl<S> IssueChallengeUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<VerifierConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self) -> VerifierResult<IssueChallengeOutput> {
        let nonce = Nonce::generate();
        let session = self.session_repo.allocate(nonce).await?;
        let audience = self.config.audience_for(&session.id);

        tracing::info!(conn_id = %session.id, audience = %audience, "Issued challenge");

        Ok(IssueChallengeOutput {
            conn_id: session.id,
            nonce: session.nonce,
            audience,
        })
    }
}
