//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Single-record lookups fail
//! with [`ArenaError::NotFound`](crate::error::ArenaError::NotFound)
//! on a miss — services never see nulls. Status mutations always go
//! through a `save` of the full updated record; the store refreshes
//! `updated_at` on every save and leaves `created_at` untouched.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ArenaResult;
use crate::models::{
    competition::{Competition, CompetitionStatus, CreateCompetition, SportType},
    matches::{CreateMatch, Match, MatchStatus},
    participant::{CreateParticipant, Participant, ParticipantStatus},
    user::{CreateUser, User, UserRole, UserStatus},
    venue::{CreateVenue, Venue, VenueStatus},
};

pub trait UserRepository: Send + Sync {
    fn create(&self, input: CreateUser) -> impl Future<Output = ArenaResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ArenaResult<User>> + Send;
    fn get_by_username(&self, username: &str) -> impl Future<Output = ArenaResult<User>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = ArenaResult<User>> + Send;
    fn exists_by_username(&self, username: &str) -> impl Future<Output = ArenaResult<bool>> + Send;
    fn exists_by_email(&self, email: &str) -> impl Future<Output = ArenaResult<bool>> + Send;
    /// Persist a modified record. Fails `NotFound` for unknown ids.
    fn save(&self, user: User) -> impl Future<Output = ArenaResult<User>> + Send;
    fn list(&self) -> impl Future<Output = ArenaResult<Vec<User>>> + Send;
    fn list_by_role(&self, role: UserRole) -> impl Future<Output = ArenaResult<Vec<User>>> + Send;
    fn list_by_status(
        &self,
        status: UserStatus,
    ) -> impl Future<Output = ArenaResult<Vec<User>>> + Send;
    /// Case-insensitive match against username, email and names.
    fn search(&self, keyword: &str) -> impl Future<Output = ArenaResult<Vec<User>>> + Send;
}

pub trait CompetitionRepository: Send + Sync {
    fn create(
        &self,
        input: CreateCompetition,
    ) -> impl Future<Output = ArenaResult<Competition>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ArenaResult<Competition>> + Send;
    fn save(&self, competition: Competition)
    -> impl Future<Output = ArenaResult<Competition>> + Send;
    fn list(&self) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    fn list_by_sport_type(
        &self,
        sport_type: SportType,
    ) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    fn list_by_status(
        &self,
        status: CompetitionStatus,
    ) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    fn list_by_organizer(
        &self,
        organizer_id: Uuid,
    ) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    fn list_by_venue(
        &self,
        venue_id: Uuid,
    ) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    fn list_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    /// Competitions whose start date is after `now`.
    fn list_upcoming(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    /// Competitions in `RegistrationOpen` whose deadline has not passed.
    fn list_open_registrations(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
    /// Case-insensitive match against name and description.
    fn search(&self, keyword: &str) -> impl Future<Output = ArenaResult<Vec<Competition>>> + Send;
}

pub trait MatchRepository: Send + Sync {
    fn create(&self, input: CreateMatch) -> impl Future<Output = ArenaResult<Match>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ArenaResult<Match>> + Send;
    fn save(&self, m: Match) -> impl Future<Output = ArenaResult<Match>> + Send;
    fn list(&self) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_by_competition(
        &self,
        competition_id: Uuid,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_by_status(
        &self,
        status: MatchStatus,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_by_referee(
        &self,
        referee_id: Uuid,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    /// Matches where the participant occupies either slot.
    fn list_by_participant(
        &self,
        participant_id: Uuid,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_by_round(
        &self,
        round_number: u32,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_by_court(
        &self,
        court_number: u32,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_by_competition_and_status(
        &self,
        competition_id: Uuid,
        status: MatchStatus,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    fn list_by_competition_and_round(
        &self,
        competition_id: Uuid,
        round_number: u32,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
    /// Scheduled matches with a date after `now`.
    fn list_upcoming(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = ArenaResult<Vec<Match>>> + Send;
}

pub trait ParticipantRepository: Send + Sync {
    fn create(
        &self,
        input: CreateParticipant,
    ) -> impl Future<Output = ArenaResult<Participant>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ArenaResult<Participant>> + Send;
    fn save(&self, participant: Participant)
    -> impl Future<Output = ArenaResult<Participant>> + Send;
    fn list(&self) -> impl Future<Output = ArenaResult<Vec<Participant>>> + Send;
    fn list_by_competition(
        &self,
        competition_id: Uuid,
    ) -> impl Future<Output = ArenaResult<Vec<Participant>>> + Send;
    fn list_by_user(&self, user_id: Uuid)
    -> impl Future<Output = ArenaResult<Vec<Participant>>> + Send;
    fn list_by_status(
        &self,
        status: ParticipantStatus,
    ) -> impl Future<Output = ArenaResult<Vec<Participant>>> + Send;
    fn list_by_competition_and_status(
        &self,
        competition_id: Uuid,
        status: ParticipantStatus,
    ) -> impl Future<Output = ArenaResult<Vec<Participant>>> + Send;
    /// Advisory count — no concurrency guard; capacity checks built
    /// on this are race-free only if the store adds one.
    fn count_by_competition(
        &self,
        competition_id: Uuid,
    ) -> impl Future<Output = ArenaResult<u64>> + Send;
    /// Case-insensitive match against names, email and club.
    fn search(&self, keyword: &str) -> impl Future<Output = ArenaResult<Vec<Participant>>> + Send;
}

pub trait VenueRepository: Send + Sync {
    fn create(&self, input: CreateVenue) -> impl Future<Output = ArenaResult<Venue>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ArenaResult<Venue>> + Send;
    fn save(&self, venue: Venue) -> impl Future<Output = ArenaResult<Venue>> + Send;
    fn list(&self) -> impl Future<Output = ArenaResult<Vec<Venue>>> + Send;
    fn list_by_status(
        &self,
        status: VenueStatus,
    ) -> impl Future<Output = ArenaResult<Vec<Venue>>> + Send;
    fn list_by_city(&self, city: &str) -> impl Future<Output = ArenaResult<Vec<Venue>>> + Send;
    fn list_indoor(&self, is_indoor: bool)
    -> impl Future<Output = ArenaResult<Vec<Venue>>> + Send;
    fn list_with_min_capacity(
        &self,
        min_capacity: u32,
    ) -> impl Future<Output = ArenaResult<Vec<Venue>>> + Send;
    /// Case-insensitive match against name, city and address.
    fn search(&self, keyword: &str) -> impl Future<Output = ArenaResult<Vec<Venue>>> + Send;
}
