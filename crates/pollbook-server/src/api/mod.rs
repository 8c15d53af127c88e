//! Request handlers

pub mod home;
pub mod route;
pub mod stats;
pub mod token;
pub mod voter;
