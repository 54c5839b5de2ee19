//! Participant domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Participant lifecycle status. New registrations start as
/// [`ParticipantStatus::Registered`]; "deletion" is a transition to
/// [`ParticipantStatus::Withdrawn`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParticipantStatus {
    Registered,
    Confirmed,
    Withdrawn,
    Disqualified,
    Winner,
    RunnerUp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub competition_id: Uuid,
    /// Must resolve to an existing user at the instant of mutation.
    pub user_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub club_name: Option<String>,
    pub license_number: Option<String>,
    pub gender: Option<Gender>,
    pub status: ParticipantStatus,
    /// Server-assigned at registration time.
    pub registration_date: DateTime<Utc>,
    pub payment_status: bool,
    pub medical_certificate: bool,
    pub insurance_status: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParticipant {
    pub competition_id: Uuid,
    pub user_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub club_name: Option<String>,
    pub license_number: Option<String>,
    pub gender: Option<Gender>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateParticipant {
    pub user_id: Option<Option<Uuid>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub nationality: Option<Option<String>>,
    pub club_name: Option<Option<String>>,
    pub license_number: Option<Option<String>>,
    pub gender: Option<Option<Gender>>,
    /// Status changes are validated against the transition table
    /// before being applied.
    pub status: Option<ParticipantStatus>,
    pub payment_status: Option<bool>,
    pub medical_certificate: Option<bool>,
    pub insurance_status: Option<bool>,
    pub notes: Option<Option<String>>,
}
