//! Arena Core — shared domain layer for the competition
//! administration backend.
//!
//! This crate provides:
//! - Domain models (users, competitions, matches, participants,
//!   venues)
//! - Repository trait definitions for data access abstraction
//! - The lifecycle engine: status transition tables enforced before
//!   any status mutation is persisted
//! - Error types shared across all crates

pub mod error;
pub mod lifecycle;
pub mod models;
pub mod repository;
