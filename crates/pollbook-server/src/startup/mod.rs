//! Server startup: logging and HTTP server setup

pub mod http;
pub mod logging;

pub use http::http_server;
pub use logging::init_logging;
