//! Authentication service implementations

pub mod credential;
pub mod token;
