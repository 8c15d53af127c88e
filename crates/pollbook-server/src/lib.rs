//! Pollbook server - HTTP surface of the poll-station check-in system
//!
//! Module structure:
//! - `model` - Configuration, application state, response types
//! - `middleware` - Token authentication
//! - `api` - Request handlers and routing
//! - `startup` - Logging and HTTP server setup
//! - `import` - Bulk roll/operator import used by the `pollbook-setup` binary

pub mod api;
pub mod import;
pub mod middleware;
pub mod model;
pub mod secured;
pub mod startup;
