//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Session, Attestation)
//! - Domain value objects (ConnId, Nonce, ClaimsToken)
//! - Domain services (audience binding, the attestation verifier seam)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
