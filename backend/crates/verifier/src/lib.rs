//! Fake Attestation Verifier
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and verifier traits
//! - `application/` - Use cases and the service that runs them
//! - `infra/` - Session store implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Protocol
//! 1. `GetParams` issues a 32-byte nonce bound to a fresh `conn_id`, plus
//!    the audience derived from that id.
//! 2. `Verify` takes the `conn_id` and attestation evidence and returns the
//!    configured claims token.
//!
//! The default verifier accepts any non-empty attestation. Sessions are
//! never consumed, so a `conn_id` may be verified any number of times.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::VerifierConfig;
pub use application::service::ChallengeSessionService;
pub use domain::services::{AcceptAllVerifier, AttestationVerifier};
pub use error::{VerifierError, VerifierResult};
pub use infra::memory::InMemorySessionStore;
pub use presentation::router::{service_router, verifier_router, verifier_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
