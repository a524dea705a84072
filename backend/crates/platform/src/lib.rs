//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (CSPRNG bytes, Base64)
//! - Environment configuration parsing

pub mod config;
pub mod crypto;
