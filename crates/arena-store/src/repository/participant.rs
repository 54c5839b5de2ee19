//! In-memory implementation of [`ParticipantRepository`].

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::models::participant::{CreateParticipant, Participant, ParticipantStatus};
use arena_core::repository::ParticipantRepository;
use chrono::Utc;
use uuid::Uuid;

use crate::db::MemoryDb;

#[derive(Clone)]
pub struct MemoryParticipantRepository {
    db: MemoryDb,
}

impl MemoryParticipantRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    fn filtered(&self, pred: impl Fn(&Participant) -> bool) -> Vec<Participant> {
        self.db
            .tables
            .participants
            .read()
            .values()
            .filter(|p| pred(p))
            .cloned()
            .collect()
    }
}

impl ParticipantRepository for MemoryParticipantRepository {
    async fn create(&self, input: CreateParticipant) -> ArenaResult<Participant> {
        let now = Utc::now();
        let participant = Participant {
            id: Uuid::new_v4(),
            competition_id: input.competition_id,
            user_id: input.user_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            date_of_birth: input.date_of_birth,
            nationality: input.nationality,
            club_name: input.club_name,
            license_number: input.license_number,
            gender: input.gender,
            status: ParticipantStatus::Registered,
            registration_date: now,
            payment_status: false,
            medical_certificate: false,
            insurance_status: false,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.db
            .tables
            .participants
            .write()
            .insert(participant.id, participant.clone());
        Ok(participant)
    }

    async fn get_by_id(&self, id: Uuid) -> ArenaResult<Participant> {
        self.db
            .tables
            .participants
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| ArenaError::not_found("participant", id))
    }

    async fn save(&self, mut participant: Participant) -> ArenaResult<Participant> {
        let mut participants = self.db.tables.participants.write();
        let existing = participants
            .get(&participant.id)
            .ok_or_else(|| ArenaError::not_found("participant", participant.id))?;
        participant.created_at = existing.created_at;
        participant.updated_at = Utc::now();
        participants.insert(participant.id, participant.clone());
        Ok(participant)
    }

    async fn list(&self) -> ArenaResult<Vec<Participant>> {
        Ok(self.filtered(|_| true))
    }

    async fn list_by_competition(&self, competition_id: Uuid) -> ArenaResult<Vec<Participant>> {
        Ok(self.filtered(|p| p.competition_id == competition_id))
    }

    async fn list_by_user(&self, user_id: Uuid) -> ArenaResult<Vec<Participant>> {
        Ok(self.filtered(|p| p.user_id == Some(user_id)))
    }

    async fn list_by_status(&self, status: ParticipantStatus) -> ArenaResult<Vec<Participant>> {
        Ok(self.filtered(|p| p.status == status))
    }

    async fn list_by_competition_and_status(
        &self,
        competition_id: Uuid,
        status: ParticipantStatus,
    ) -> ArenaResult<Vec<Participant>> {
        Ok(self.filtered(|p| p.competition_id == competition_id && p.status == status))
    }

    async fn count_by_competition(&self, competition_id: Uuid) -> ArenaResult<u64> {
        Ok(self
            .db
            .tables
            .participants
            .read()
            .values()
            .filter(|p| p.competition_id == competition_id)
            .count() as u64)
    }

    async fn search(&self, keyword: &str) -> ArenaResult<Vec<Participant>> {
        let needle = keyword.to_lowercase();
        Ok(self.filtered(|p| {
            p.first_name.to_lowercase().contains(&needle)
                || p.last_name.to_lowercase().contains(&needle)
                || p.email.to_lowercase().contains(&needle)
                || p.club_name
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        }))
    }
}
