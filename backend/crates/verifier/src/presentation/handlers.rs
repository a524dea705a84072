//! HTTP Handlers

use crate::application::service::ChallengeSessionService;
use crate::application::verify_attestation::VerifyAttestationInput;
use crate::domain::repository::SessionRepository;
use crate::domain::services::AttestationVerifier;
use crate::error::VerifierResult;
use crate::presentation::dto::{GetParamsResponse, VerifyRequest, VerifyResponse};
use axum::Json;
use axum::extract::State;
use platform::crypto::to_base64;

/// GET|POST /v0/params
///
/// The request body, if any, is ignored.
pub async fn get_params<S, V>(
    State(service): State<ChallengeSessionService<S, V>>,
) -> VerifierResult<Json<GetParamsResponse>>
where
    S: SessionRepository + Send + Sync + 'static,
    V: AttestationVerifier + Send + Sync + 'static,
{
    let output = service.issue_challenge().await?;

    Ok(Json(GetParamsResponse {
        conn_id: output.conn_id.to_string(),
        nonce: to_base64(output.nonce.as_bytes()),
        audience: output.audience,
    }))
}

/// POST /v0/verify
pub async fn verify<S, V>(
    State(service): State<ChallengeSessionService<S, V>>,
    Json(req): Json<VerifyRequest>,
) -> VerifierResult<Json<VerifyResponse>>
where
    S: SessionRepository + Send + Sync + 'static,
    V: AttestationVerifier + Send + Sync + 'static,
{
    let input = VerifyAttestationInput {
        conn_id: req.conn_id,
        attestation: req.attestation.map(Into::into),
    };

    let output = service.verify_attestation(input).await?;

    Ok(Json(VerifyResponse {
        claims_token: to_base64(output.claims_token.as_bytes()),
    }))
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}
