//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON files for the RosterStorage port
//! - Advisory file lock guarding the data directory
//! - Sample roster for first runs

pub mod json;
pub mod lock;
pub mod sample;
