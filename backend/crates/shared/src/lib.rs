//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the error vocabulary shared by every crate:
//! - [`error::kind::ErrorKind`] canonical status classes
//! - [`error::app_error::AppError`] and the [`error::app_error::AppResult`] alias
//! - Conversions from std errors and the axum response mapping
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
