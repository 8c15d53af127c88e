//! Data models for the server
//!
//! - `config` - Configuration management
//! - `app_state` - Application state shared across handlers
//! - `response` - HTTP error response types

pub mod app_state;
pub mod config;
pub mod response;

pub use app_state::AppState;
pub use config::Configuration;
pub use response::ErrorResult;
