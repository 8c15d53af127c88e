//! Pollbook Auth - Operator credentials and session tokens
//!
//! This crate provides:
//! - JWT token handling (issue, verify)
//! - Credential store backed by the operators table (bcrypt)

pub mod model;
pub mod service;

// Re-export commonly used types
pub use model::*;
