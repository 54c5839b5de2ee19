//! Match domain model.
//!
//! Round, court and match numbers are caller-supplied scheduling
//! data — no pairing or bracket generation happens here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Match lifecycle status. New matches start as
/// [`MatchStatus::Scheduled`]; "deletion" is a transition to
/// [`MatchStatus::Cancelled`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Postponed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub participant1_id: Option<Uuid>,
    pub participant2_id: Option<Uuid>,
    /// Must resolve to an existing user at the instant of mutation.
    pub referee_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub score_participant1: i32,
    pub score_participant2: i32,
    pub status: MatchStatus,
    pub match_number: Option<u32>,
    pub round_number: Option<u32>,
    pub court_number: Option<u32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatch {
    pub competition_id: Uuid,
    pub participant1_id: Option<Uuid>,
    pub participant2_id: Option<Uuid>,
    pub referee_id: Option<Uuid>,
    pub match_date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub match_number: Option<u32>,
    pub round_number: Option<u32>,
    pub court_number: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateMatch {
    pub participant1_id: Option<Option<Uuid>>,
    pub participant2_id: Option<Option<Uuid>>,
    pub referee_id: Option<Option<Uuid>>,
    pub match_date: Option<Option<DateTime<Utc>>>,
    pub duration_minutes: Option<Option<u32>>,
    pub score_participant1: Option<i32>,
    pub score_participant2: Option<i32>,
    /// Status changes are validated against the transition table
    /// before being applied.
    pub status: Option<MatchStatus>,
    pub match_number: Option<Option<u32>>,
    pub round_number: Option<Option<u32>>,
    pub court_number: Option<Option<u32>>,
    pub notes: Option<Option<String>>,
}
