//! Arena Store — in-memory repository implementations.
//!
//! This crate provides:
//! - A process-local database handle ([`MemoryDb`])
//! - Repository implementations for the `arena-core` traits
//!
//! The store assigns ids and `created_at`/`updated_at` on create and
//! refreshes `updated_at` on every save. It backs the integration
//! tests and the server binary; a persistent store can replace it by
//! implementing the same traits.

mod db;
pub mod repository;

pub use db::MemoryDb;
pub use repository::{
    MemoryCompetitionRepository, MemoryMatchRepository, MemoryParticipantRepository,
    MemoryUserRepository, MemoryVenueRepository,
};
