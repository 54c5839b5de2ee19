//! Venue domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VenueStatus {
    Active,
    Inactive,
    Maintenance,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub capacity: Option<u32>,
    pub parking_capacity: Option<u32>,
    pub is_indoor: bool,
    pub has_lighting: bool,
    pub has_changing_rooms: bool,
    pub has_medical_room: bool,
    pub status: VenueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub capacity: Option<u32>,
    pub parking_capacity: Option<u32>,
    pub is_indoor: bool,
    pub has_lighting: bool,
    pub has_changing_rooms: bool,
    pub has_medical_room: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub postal_code: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub capacity: Option<Option<u32>>,
    pub parking_capacity: Option<Option<u32>>,
    pub is_indoor: Option<bool>,
    pub has_lighting: Option<bool>,
    pub has_changing_rooms: Option<bool>,
    pub has_medical_room: Option<bool>,
    pub status: Option<VenueStatus>,
}
