//! Server middleware

pub mod auth;
