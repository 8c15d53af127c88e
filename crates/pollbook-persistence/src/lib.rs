//! Pollbook Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions for the `operators` and `voters` tables
//! - Database connection helper
//! - Schema bootstrap for fresh databases

pub mod db;
pub mod entity;

// Re-export sea-orm for convenience
pub use sea_orm;

pub use db::{connect, setup_schema};
