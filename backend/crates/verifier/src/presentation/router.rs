//! Verifier Router

use crate::application::config::VerifierConfig;
use crate::application::service::ChallengeSessionService;
use crate::domain::repository::SessionRepository;
use crate::domain::services::{AcceptAllVerifier, AttestationVerifier};
use crate::infra::memory::InMemorySessionStore;
use crate::presentation::handlers;
use axum::{
    Router,
    routing::{get, post},
};
use std::num::NonZeroUsize;

/// Create the fake verifier router: in-memory sessions, every attestation accepted.
///
/// `max_sessions` caps the retained sessions (oldest evicted first); `None` keeps
/// every session for the life of the process.
pub fn verifier_router(config: VerifierConfig, max_sessions: Option<NonZeroUsize>) -> Router {
    let store = InMemorySessionStore::with_limit(max_sessions);
    verifier_router_generic(store, AcceptAllVerifier, config)
}

/// Create a router for any store and verifier implementation
pub fn verifier_router_generic<S, V>(store: S, verifier: V, config: VerifierConfig) -> Router
where
    S: SessionRepository + Send + Sync + 'static,
    V: AttestationVerifier + Send + Sync + 'static,
{
    service_router(ChallengeSessionService::new(store, verifier, config))
}

/// Create a router over an existing service (shares its sessions)
pub fn service_router<S, V>(service: ChallengeSessionService<S, V>) -> Router
where
    S: SessionRepository + Send + Sync + 'static,
    V: AttestationVerifier + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/v0/params",
            get(handlers::get_params::<S, V>).post(handlers::get_params::<S, V>),
        )
        .route("/v0/verify", post(handlers::verify::<S, V>))
        .route("/healthz", get(handlers::healthz))
        .with_state(service)
}
