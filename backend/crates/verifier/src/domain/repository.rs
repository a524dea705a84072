//! Repository Traits
//!
//! Interfaces for session storage. Implementation is in infrastructure layer.

use crate::domain::entities::Session;
use crate::domain::value_objects::Nonce;
use crate::error::VerifierResult;

/// Session store trait
///
/// Implementations must make `allocate` linearizable: two concurrent calls
/// never receive the same identifier, and `lookup` never sees a session
/// before its nonce is recorded.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Assign the next identifier and bind `nonce` to it
    async fn allocate(&self, nonce: Nonce) -> VerifierResult<Session>;

    /// Find the nonce bound to `conn_id`
    async fn lookup(&self, conn_id: &str) -> VerifierResult<Option<Nonce>>;
}
