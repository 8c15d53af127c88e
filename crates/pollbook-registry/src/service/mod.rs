//! Registry service implementations

pub mod stats;
pub mod voter;
