//! Arena Domain — services for competitions, matches, participants,
//! venues and users.
//!
//! Every mutation validates its referential preconditions (supplied
//! organizer/venue/referee/user ids must resolve) before any save,
//! and routes status changes through the lifecycle engine in
//! `arena-core`. Queries delegate to the repository traits.

pub mod competition;
pub mod matches;
pub mod participant;
pub mod user;
pub mod venue;

pub use competition::CompetitionService;
pub use matches::MatchService;
pub use participant::ParticipantService;
pub use user::{RegisterUser, UpdateUserRequest, UserService};
pub use venue::VenueService;
