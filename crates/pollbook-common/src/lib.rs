//! Pollbook Common - Shared types and constants
//!
//! This crate provides the foundational types used across all Pollbook
//! components:
//! - Error types
//! - Common constants

pub mod error;

// Re-exports for convenience
pub use error::PollbookError;

/// Header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Prefix of the `Authorization` header value
pub const BEARER_PREFIX: &str = "Bearer ";

/// Token type reported by the login endpoint
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Timestamp format for check-in records: UTC ISO-8601 with millisecond
/// precision, e.g. `2021-01-18T10:10:10.123Z`
pub const CHECKIN_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Length of an hour bucket prefix of a check-in timestamp
/// (`YYYY-MM-DDTHH`)
pub const HOUR_BUCKET_LEN: usize = 13;
