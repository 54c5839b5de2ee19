//! Competition domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SportType {
    Football,
    Basketball,
    Volleyball,
    Tennis,
    Swimming,
    Athletics,
    Boxing,
    Wrestling,
    Judo,
    Karate,
    TableTennis,
    Badminton,
}

/// Competition lifecycle status. New competitions start as
/// [`CompetitionStatus::Planned`]; "deletion" is a transition to
/// [`CompetitionStatus::Cancelled`], never a physical removal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompetitionStatus {
    Planned,
    RegistrationOpen,
    RegistrationClosed,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GenderCategory {
    Male,
    Female,
    Mixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sport_type: SportType,
    pub status: CompetitionStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub max_participants: Option<u32>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub gender_category: Option<GenderCategory>,
    pub entry_fee: Option<f64>,
    pub prize_pool: Option<f64>,
    /// Must resolve to an existing venue at the instant of mutation.
    pub venue_id: Option<Uuid>,
    /// Must resolve to an existing user at the instant of mutation.
    pub organizer_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompetition {
    pub name: String,
    pub description: Option<String>,
    pub sport_type: SportType,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub max_participants: Option<u32>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub gender_category: Option<GenderCategory>,
    pub entry_fee: Option<f64>,
    pub prize_pool: Option<f64>,
    pub venue_id: Option<Uuid>,
    pub organizer_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCompetition {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub sport_type: Option<SportType>,
    /// Status changes are validated against the transition table
    /// before being applied.
    pub status: Option<CompetitionStatus>,
    pub start_date: Option<Option<DateTime<Utc>>>,
    pub end_date: Option<Option<DateTime<Utc>>>,
    pub registration_deadline: Option<Option<DateTime<Utc>>>,
    pub max_participants: Option<Option<u32>>,
    pub min_age: Option<Option<u32>>,
    pub max_age: Option<Option<u32>>,
    pub gender_category: Option<Option<GenderCategory>>,
    pub entry_fee: Option<Option<f64>>,
    pub prize_pool: Option<Option<f64>>,
    pub venue_id: Option<Option<Uuid>>,
    pub organizer_id: Option<Option<Uuid>>,
}
