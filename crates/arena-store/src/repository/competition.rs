//! In-memory implementation of [`CompetitionRepository`].

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::models::competition::{
    Competition, CompetitionStatus, CreateCompetition, SportType,
};
use arena_core::repository::CompetitionRepository;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::MemoryDb;

#[derive(Clone)]
pub struct MemoryCompetitionRepository {
    db: MemoryDb,
}

impl MemoryCompetitionRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    fn filtered(&self, pred: impl Fn(&Competition) -> bool) -> Vec<Competition> {
        self.db
            .tables
            .competitions
            .read()
            .values()
            .filter(|c| pred(c))
            .cloned()
            .collect()
    }
}

impl CompetitionRepository for MemoryCompetitionRepository {
    async fn create(&self, input: CreateCompetition) -> ArenaResult<Competition> {
        let now = Utc::now();
        let competition = Competition {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            sport_type: input.sport_type,
            status: CompetitionStatus::Planned,
            start_date: input.start_date,
            end_date: input.end_date,
            registration_deadline: input.registration_deadline,
            max_participants: input.max_participants,
            min_age: input.min_age,
            max_age: input.max_age,
            gender_category: input.gender_category,
            entry_fee: input.entry_fee,
            prize_pool: input.prize_pool,
            venue_id: input.venue_id,
            organizer_id: input.organizer_id,
            created_at: now,
            updated_at: now,
        };
        self.db
            .tables
            .competitions
            .write()
            .insert(competition.id, competition.clone());
        Ok(competition)
    }

    async fn get_by_id(&self, id: Uuid) -> ArenaResult<Competition> {
        self.db
            .tables
            .competitions
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| ArenaError::not_found("competition", id))
    }

    async fn save(&self, mut competition: Competition) -> ArenaResult<Competition> {
        let mut competitions = self.db.tables.competitions.write();
        let existing = competitions
            .get(&competition.id)
            .ok_or_else(|| ArenaError::not_found("competition", competition.id))?;
        competition.created_at = existing.created_at;
        competition.updated_at = Utc::now();
        competitions.insert(competition.id, competition.clone());
        Ok(competition)
    }

    async fn list(&self) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|_| true))
    }

    async fn list_by_sport_type(&self, sport_type: SportType) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|c| c.sport_type == sport_type))
    }

    async fn list_by_status(&self, status: CompetitionStatus) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|c| c.status == status))
    }

    async fn list_by_organizer(&self, organizer_id: Uuid) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|c| c.organizer_id == Some(organizer_id)))
    }

    async fn list_by_venue(&self, venue_id: Uuid) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|c| c.venue_id == Some(venue_id)))
    }

    async fn list_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|c| c.start_date.is_some_and(|d| d >= from && d <= to)))
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|c| c.start_date.is_some_and(|d| d > now)))
    }

    async fn list_open_registrations(&self, now: DateTime<Utc>) -> ArenaResult<Vec<Competition>> {
        Ok(self.filtered(|c| {
            c.status == CompetitionStatus::RegistrationOpen
                && c.registration_deadline.is_none_or(|d| d > now)
        }))
    }

    async fn search(&self, keyword: &str) -> ArenaResult<Vec<Competition>> {
        let needle = keyword.to_lowercase();
        Ok(self.filtered(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        }))
    }
}
