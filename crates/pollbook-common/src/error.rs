//! Error types for Pollbook
//!
//! Domain errors with richer structure (voter not found, already voted)
//! live next to the services that raise them; this enum covers the
//! cross-cutting failures.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum PollbookError {
    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("configuration error: {0}")]
    ConfigError(String),
}
