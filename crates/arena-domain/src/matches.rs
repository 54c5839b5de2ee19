//! Match service.

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::lifecycle::check_transition;
use arena_core::models::matches::{CreateMatch, Match, MatchStatus, UpdateMatch};
use arena_core::repository::{MatchRepository, UserRepository};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// Match orchestration: referee references checked before saves,
/// lifecycle-gated status changes, filtered queries.
pub struct MatchService<M, U> {
    matches: M,
    users: U,
}

impl<M, U> MatchService<M, U>
where
    M: MatchRepository,
    U: UserRepository,
{
    pub fn new(matches: M, users: U) -> Self {
        Self { matches, users }
    }

    async fn check_referee(&self, referee_id: Option<Uuid>) -> ArenaResult<()> {
        if let Some(id) = referee_id {
            self.users
                .get_by_id(id)
                .await
                .map_err(|_| ArenaError::not_found("referee", id))?;
        }
        Ok(())
    }

    pub async fn create(&self, input: CreateMatch) -> ArenaResult<Match> {
        self.check_referee(input.referee_id).await?;

        let m = self.matches.create(input).await?;
        info!(id = %m.id, competition_id = %m.competition_id, "match created");
        Ok(m)
    }

    pub async fn update(&self, id: Uuid, update: UpdateMatch) -> ArenaResult<Match> {
        let mut m = self.matches.get_by_id(id).await?;

        self.check_referee(update.referee_id.flatten()).await?;

        if let Some(status) = update.status
            && status != m.status
        {
            check_transition(m.status, status)?;
            m.status = status;
        }

        if let Some(participant1_id) = update.participant1_id {
            m.participant1_id = participant1_id;
        }
        if let Some(participant2_id) = update.participant2_id {
            m.participant2_id = participant2_id;
        }
        if let Some(referee_id) = update.referee_id {
            m.referee_id = referee_id;
        }
        if let Some(match_date) = update.match_date {
            m.match_date = match_date;
        }
        if let Some(duration_minutes) = update.duration_minutes {
            m.duration_minutes = duration_minutes;
        }
        if let Some(score1) = update.score_participant1 {
            m.score_participant1 = score1;
        }
        if let Some(score2) = update.score_participant2 {
            m.score_participant2 = score2;
        }
        if let Some(match_number) = update.match_number {
            m.match_number = match_number;
        }
        if let Some(round_number) = update.round_number {
            m.round_number = round_number;
        }
        if let Some(court_number) = update.court_number {
            m.court_number = court_number;
        }
        if let Some(notes) = update.notes {
            m.notes = notes;
        }

        let m = self.matches.save(m).await?;
        info!(id = %m.id, "match updated");
        Ok(m)
    }

    /// Change status through the lifecycle engine.
    pub async fn change_status(&self, id: Uuid, status: MatchStatus) -> ArenaResult<Match> {
        let mut m = self.matches.get_by_id(id).await?;
        check_transition(m.status, status)?;
        m.status = status;

        let m = self.matches.save(m).await?;
        info!(id = %m.id, status = ?m.status, "match status changed");
        Ok(m)
    }

    /// "Delete" a match: a transition to `Cancelled`. Rejected for
    /// matches already completed or cancelled.
    pub async fn cancel(&self, id: Uuid) -> ArenaResult<Match> {
        self.change_status(id, MatchStatus::Cancelled).await
    }

    /// Record a score. Accepted regardless of match status — the
    /// status gate applies to lifecycle changes only.
    pub async fn update_score(&self, id: Uuid, score1: i32, score2: i32) -> ArenaResult<Match> {
        let mut m = self.matches.get_by_id(id).await?;
        m.score_participant1 = score1;
        m.score_participant2 = score2;

        let m = self.matches.save(m).await?;
        info!(id = %m.id, score1, score2, "match score updated");
        Ok(m)
    }

    pub async fn get(&self, id: Uuid) -> ArenaResult<Match> {
        self.matches.get_by_id(id).await
    }

    pub async fn list(&self) -> ArenaResult<Vec<Match>> {
        self.matches.list().await
    }

    pub async fn list_by_competition(&self, competition_id: Uuid) -> ArenaResult<Vec<Match>> {
        self.matches.list_by_competition(competition_id).await
    }

    pub async fn list_by_status(&self, status: MatchStatus) -> ArenaResult<Vec<Match>> {
        self.matches.list_by_status(status).await
    }

    pub async fn list_by_referee(&self, referee_id: Uuid) -> ArenaResult<Vec<Match>> {
        self.matches.list_by_referee(referee_id).await
    }

    pub async fn list_by_participant(&self, participant_id: Uuid) -> ArenaResult<Vec<Match>> {
        self.matches.list_by_participant(participant_id).await
    }

    pub async fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ArenaResult<Vec<Match>> {
        self.matches.list_between(from, to).await
    }

    pub async fn list_by_round(&self, round_number: u32) -> ArenaResult<Vec<Match>> {
        self.matches.list_by_round(round_number).await
    }

    pub async fn list_by_court(&self, court_number: u32) -> ArenaResult<Vec<Match>> {
        self.matches.list_by_court(court_number).await
    }

    pub async fn list_by_competition_and_status(
        &self,
        competition_id: Uuid,
        status: MatchStatus,
    ) -> ArenaResult<Vec<Match>> {
        self.matches
            .list_by_competition_and_status(competition_id, status)
            .await
    }

    pub async fn list_by_competition_and_round(
        &self,
        competition_id: Uuid,
        round_number: u32,
    ) -> ArenaResult<Vec<Match>> {
        self.matches
            .list_by_competition_and_round(competition_id, round_number)
            .await
    }

    pub async fn list_upcoming(&self) -> ArenaResult<Vec<Match>> {
        self.matches.list_upcoming(Utc::now()).await
    }
}
