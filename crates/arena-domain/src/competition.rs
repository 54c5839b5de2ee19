//! Competition service.

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::lifecycle::check_transition;
use arena_core::models::competition::{
    Competition, CompetitionStatus, CreateCompetition, SportType, UpdateCompetition,
};
use arena_core::repository::{CompetitionRepository, UserRepository, VenueRepository};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// Competition orchestration: referential checks before saves,
/// lifecycle-gated status changes, filtered queries.
pub struct CompetitionService<C, U, V> {
    competitions: C,
    users: U,
    venues: V,
}

impl<C, U, V> CompetitionService<C, U, V>
where
    C: CompetitionRepository,
    U: UserRepository,
    V: VenueRepository,
{
    pub fn new(competitions: C, users: U, venues: V) -> Self {
        Self {
            competitions,
            users,
            venues,
        }
    }

    /// A supplied organizer id must resolve to an existing user and
    /// a supplied venue id to an existing venue; dangling references
    /// are never silently dropped.
    async fn check_references(
        &self,
        organizer_id: Option<Uuid>,
        venue_id: Option<Uuid>,
    ) -> ArenaResult<()> {
        if let Some(id) = organizer_id {
            self.users
                .get_by_id(id)
                .await
                .map_err(|_| ArenaError::not_found("organizer", id))?;
        }
        if let Some(id) = venue_id {
            self.venues
                .get_by_id(id)
                .await
                .map_err(|_| ArenaError::not_found("venue", id))?;
        }
        Ok(())
    }

    pub async fn create(&self, input: CreateCompetition) -> ArenaResult<Competition> {
        self.check_references(input.organizer_id, input.venue_id)
            .await?;

        let competition = self.competitions.create(input).await?;
        info!(id = %competition.id, name = %competition.name, "competition created");
        Ok(competition)
    }

    pub async fn update(&self, id: Uuid, update: UpdateCompetition) -> ArenaResult<Competition> {
        let mut competition = self.competitions.get_by_id(id).await?;

        self.check_references(
            update.organizer_id.flatten(),
            update.venue_id.flatten(),
        )
        .await?;

        if let Some(status) = update.status
            && status != competition.status
        {
            check_transition(competition.status, status)?;
            competition.status = status;
        }

        if let Some(name) = update.name {
            competition.name = name;
        }
        if let Some(description) = update.description {
            competition.description = description;
        }
        if let Some(sport_type) = update.sport_type {
            competition.sport_type = sport_type;
        }
        if let Some(start_date) = update.start_date {
            competition.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            competition.end_date = end_date;
        }
        if let Some(deadline) = update.registration_deadline {
            competition.registration_deadline = deadline;
        }
        if let Some(max_participants) = update.max_participants {
            competition.max_participants = max_participants;
        }
        if let Some(min_age) = update.min_age {
            competition.min_age = min_age;
        }
        if let Some(max_age) = update.max_age {
            competition.max_age = max_age;
        }
        if let Some(gender_category) = update.gender_category {
            competition.gender_category = gender_category;
        }
        if let Some(entry_fee) = update.entry_fee {
            competition.entry_fee = entry_fee;
        }
        if let Some(prize_pool) = update.prize_pool {
            competition.prize_pool = prize_pool;
        }
        if let Some(venue_id) = update.venue_id {
            competition.venue_id = venue_id;
        }
        if let Some(organizer_id) = update.organizer_id {
            competition.organizer_id = organizer_id;
        }

        let competition = self.competitions.save(competition).await?;
        info!(id = %competition.id, name = %competition.name, "competition updated");
        Ok(competition)
    }

    /// Change status through the lifecycle engine.
    pub async fn change_status(
        &self,
        id: Uuid,
        status: CompetitionStatus,
    ) -> ArenaResult<Competition> {
        let mut competition = self.competitions.get_by_id(id).await?;
        check_transition(competition.status, status)?;
        competition.status = status;

        let competition = self.competitions.save(competition).await?;
        info!(id = %competition.id, status = ?competition.status, "competition status changed");
        Ok(competition)
    }

    /// "Delete" a competition: a transition to `Cancelled`, never a
    /// physical removal. Rejected for terminal states.
    pub async fn cancel(&self, id: Uuid) -> ArenaResult<Competition> {
        self.change_status(id, CompetitionStatus::Cancelled).await
    }

    pub async fn get(&self, id: Uuid) -> ArenaResult<Competition> {
        self.competitions.get_by_id(id).await
    }

    pub async fn list(&self) -> ArenaResult<Vec<Competition>> {
        self.competitions.list().await
    }

    pub async fn list_by_sport_type(&self, sport_type: SportType) -> ArenaResult<Vec<Competition>> {
        self.competitions.list_by_sport_type(sport_type).await
    }

    pub async fn list_by_status(
        &self,
        status: CompetitionStatus,
    ) -> ArenaResult<Vec<Competition>> {
        self.competitions.list_by_status(status).await
    }

    pub async fn list_by_organizer(&self, organizer_id: Uuid) -> ArenaResult<Vec<Competition>> {
        self.competitions.list_by_organizer(organizer_id).await
    }

    pub async fn list_by_venue(&self, venue_id: Uuid) -> ArenaResult<Vec<Competition>> {
        self.competitions.list_by_venue(venue_id).await
    }

    pub async fn list_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ArenaResult<Vec<Competition>> {
        self.competitions.list_starting_between(from, to).await
    }

    pub async fn list_upcoming(&self) -> ArenaResult<Vec<Competition>> {
        self.competitions.list_upcoming(Utc::now()).await
    }

    pub async fn list_open_registrations(&self) -> ArenaResult<Vec<Competition>> {
        self.competitions.list_open_registrations(Utc::now()).await
    }

    pub async fn search(&self, keyword: &str) -> ArenaResult<Vec<Competition>> {
        self.competitions.search(keyword).await
    }
}
