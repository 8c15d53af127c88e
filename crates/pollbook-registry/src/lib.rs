//! Pollbook Registry - The voter roll and its check-in state machine
//!
//! This crate is the single source of truth for voter state. Its central
//! contract is the at-most-once transition: a voter moves from "not voted"
//! to "voted" exactly once, no matter how many terminals race on it.

pub mod model;
pub mod service;

pub use model::{CheckInError, VoterView};
