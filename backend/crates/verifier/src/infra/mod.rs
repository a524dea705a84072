//! Infrastructure Layer
//!
//! Session store implementations.

pub mod memory;
