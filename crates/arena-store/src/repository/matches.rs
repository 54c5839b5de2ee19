//! In-memory implementation of [`MatchRepository`].

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::models::matches::{CreateMatch, Match, MatchStatus};
use arena_core::repository::MatchRepository;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::MemoryDb;

#[derive(Clone)]
pub struct MemoryMatchRepository {
    db: MemoryDb,
}

impl MemoryMatchRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    fn filtered(&self, pred: impl Fn(&Match) -> bool) -> Vec<Match> {
        self.db
            .tables
            .matches
            .read()
            .values()
            .filter(|m| pred(m))
            .cloned()
            .collect()
    }
}

impl MatchRepository for MemoryMatchRepository {
    async fn create(&self, input: CreateMatch) -> ArenaResult<Match> {
        let now = Utc::now();
        let m = Match {
            id: Uuid::new_v4(),
            competition_id: input.competition_id,
            participant1_id: input.participant1_id,
            participant2_id: input.participant2_id,
            referee_id: input.referee_id,
            match_date: input.match_date,
            duration_minutes: input.duration_minutes,
            score_participant1: 0,
            score_participant2: 0,
            status: MatchStatus::Scheduled,
            match_number: input.match_number,
            round_number: input.round_number,
            court_number: input.court_number,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.db.tables.matches.write().insert(m.id, m.clone());
        Ok(m)
    }

    async fn get_by_id(&self, id: Uuid) -> ArenaResult<Match> {
        self.db
            .tables
            .matches
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| ArenaError::not_found("match", id))
    }

    async fn save(&self, mut m: Match) -> ArenaResult<Match> {
        let mut matches = self.db.tables.matches.write();
        let existing = matches
            .get(&m.id)
            .ok_or_else(|| ArenaError::not_found("match", m.id))?;
        m.created_at = existing.created_at;
        m.updated_at = Utc::now();
        matches.insert(m.id, m.clone());
        Ok(m)
    }

    async fn list(&self) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|_| true))
    }

    async fn list_by_competition(&self, competition_id: Uuid) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| m.competition_id == competition_id))
    }

    async fn list_by_status(&self, status: MatchStatus) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| m.status == status))
    }

    async fn list_by_referee(&self, referee_id: Uuid) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| m.referee_id == Some(referee_id)))
    }

    async fn list_by_participant(&self, participant_id: Uuid) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| {
            m.participant1_id == Some(participant_id) || m.participant2_id == Some(participant_id)
        }))
    }

    async fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| m.match_date.is_some_and(|d| d >= from && d <= to)))
    }

    async fn list_by_round(&self, round_number: u32) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| m.round_number == Some(round_number)))
    }

    async fn list_by_court(&self, court_number: u32) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| m.court_number == Some(court_number)))
    }

    async fn list_by_competition_and_status(
        &self,
        competition_id: Uuid,
        status: MatchStatus,
    ) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| m.competition_id == competition_id && m.status == status))
    }

    async fn list_by_competition_and_round(
        &self,
        competition_id: Uuid,
        round_number: u32,
    ) -> ArenaResult<Vec<Match>> {
        Ok(self
            .filtered(|m| m.competition_id == competition_id && m.round_number == Some(round_number)))
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> ArenaResult<Vec<Match>> {
        Ok(self.filtered(|m| {
            m.status == MatchStatus::Scheduled && m.match_date.is_some_and(|d| d > now)
        }))
    }
}
