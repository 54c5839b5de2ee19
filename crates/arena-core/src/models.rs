//! Domain models for Arena.
//!
//! These are the core types shared across all crates.

pub mod competition;
pub mod matches;
pub mod participant;
pub mod user;
pub mod venue;
