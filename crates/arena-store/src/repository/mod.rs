//! In-memory repository implementations.

mod competition;
mod matches;
mod participant;
mod user;
mod venue;

pub use competition::MemoryCompetitionRepository;
pub use matches::MemoryMatchRepository;
pub use participant::MemoryParticipantRepository;
pub use user::MemoryUserRepository;
pub use venue::MemoryVenueRepository;
