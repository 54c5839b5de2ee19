//! Participant service.

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::lifecycle::check_transition;
use arena_core::models::competition::Competition;
use arena_core::models::participant::{
    CreateParticipant, Participant, ParticipantStatus, UpdateParticipant,
};
use arena_core::repository::{ParticipantRepository, UserRepository};
use tracing::info;
use uuid::Uuid;

/// Participant orchestration: linked-user references checked before
/// saves, lifecycle-gated status changes, filtered queries.
pub struct ParticipantService<P, U> {
    participants: P,
    users: U,
}

impl<P, U> ParticipantService<P, U>
where
    P: ParticipantRepository,
    U: UserRepository,
{
    pub fn new(participants: P, users: U) -> Self {
        Self { participants, users }
    }

    async fn check_user(&self, user_id: Option<Uuid>) -> ArenaResult<()> {
        if let Some(id) = user_id {
            self.users
                .get_by_id(id)
                .await
                .map_err(|_| ArenaError::not_found("user", id))?;
        }
        Ok(())
    }

    /// Register a participant. The registration date is assigned
    /// server-side. No capacity bound is enforced here; callers that
    /// want one compare [`Self::remaining_capacity`] first (the
    /// count is advisory — see the repository docs).
    pub async fn register(&self, input: CreateParticipant) -> ArenaResult<Participant> {
        self.check_user(input.user_id).await?;

        let participant = self.participants.create(input).await?;
        info!(
            id = %participant.id,
            competition_id = %participant.competition_id,
            name = %participant.full_name(),
            "participant registered"
        );
        Ok(participant)
    }

    pub async fn update(&self, id: Uuid, update: UpdateParticipant) -> ArenaResult<Participant> {
        let mut participant = self.participants.get_by_id(id).await?;

        self.check_user(update.user_id.flatten()).await?;

        if let Some(status) = update.status
            && status != participant.status
        {
            check_transition(participant.status, status)?;
            participant.status = status;
        }

        if let Some(user_id) = update.user_id {
            participant.user_id = user_id;
        }
        if let Some(first_name) = update.first_name {
            participant.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            participant.last_name = last_name;
        }
        if let Some(email) = update.email {
            participant.email = email;
        }
        if let Some(phone_number) = update.phone_number {
            participant.phone_number = phone_number;
        }
        if let Some(date_of_birth) = update.date_of_birth {
            participant.date_of_birth = date_of_birth;
        }
        if let Some(nationality) = update.nationality {
            participant.nationality = nationality;
        }
        if let Some(club_name) = update.club_name {
            participant.club_name = club_name;
        }
        if let Some(license_number) = update.license_number {
            participant.license_number = license_number;
        }
        if let Some(gender) = update.gender {
            participant.gender = gender;
        }
        if let Some(payment_status) = update.payment_status {
            participant.payment_status = payment_status;
        }
        if let Some(medical_certificate) = update.medical_certificate {
            participant.medical_certificate = medical_certificate;
        }
        if let Some(insurance_status) = update.insurance_status {
            participant.insurance_status = insurance_status;
        }
        if let Some(notes) = update.notes {
            participant.notes = notes;
        }

        let participant = self.participants.save(participant).await?;
        info!(id = %participant.id, "participant updated");
        Ok(participant)
    }

    /// Change status through the lifecycle engine.
    pub async fn change_status(
        &self,
        id: Uuid,
        status: ParticipantStatus,
    ) -> ArenaResult<Participant> {
        let mut participant = self.participants.get_by_id(id).await?;
        check_transition(participant.status, status)?;
        participant.status = status;

        let participant = self.participants.save(participant).await?;
        info!(id = %participant.id, status = ?participant.status, "participant status changed");
        Ok(participant)
    }

    /// "Delete" a participant: a transition to `Withdrawn`. Rejected
    /// for participants already in a terminal state.
    pub async fn withdraw(&self, id: Uuid) -> ArenaResult<Participant> {
        self.change_status(id, ParticipantStatus::Withdrawn).await
    }

    pub async fn count_by_competition(&self, competition_id: Uuid) -> ArenaResult<u64> {
        self.participants.count_by_competition(competition_id).await
    }

    /// Remaining capacity for a competition: `None` means no limit
    /// is configured. Advisory only — concurrent registrations can
    /// race unless the store provides a transactional guard.
    pub async fn remaining_capacity(&self, competition: &Competition) -> ArenaResult<Option<u64>> {
        let Some(max) = competition.max_participants else {
            return Ok(None);
        };
        let count = self
            .participants
            .count_by_competition(competition.id)
            .await?;
        Ok(Some(u64::from(max).saturating_sub(count)))
    }

    pub async fn get(&self, id: Uuid) -> ArenaResult<Participant> {
        self.participants.get_by_id(id).await
    }

    pub async fn list(&self) -> ArenaResult<Vec<Participant>> {
        self.participants.list().await
    }

    pub async fn list_by_competition(&self, competition_id: Uuid) -> ArenaResult<Vec<Participant>> {
        self.participants.list_by_competition(competition_id).await
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> ArenaResult<Vec<Participant>> {
        self.participants.list_by_user(user_id).await
    }

    pub async fn list_by_status(
        &self,
        status: ParticipantStatus,
    ) -> ArenaResult<Vec<Participant>> {
        self.participants.list_by_status(status).await
    }

    pub async fn list_by_competition_and_status(
        &self,
        competition_id: Uuid,
        status: ParticipantStatus,
    ) -> ArenaResult<Vec<Participant>> {
        self.participants
            .list_by_competition_and_status(competition_id, status)
            .await
    }

    pub async fn search(&self, keyword: &str) -> ArenaResult<Vec<Participant>> {
        self.participants.search(keyword).await
    }
}
