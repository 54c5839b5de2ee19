//! In-memory implementation of [`VenueRepository`].

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::models::venue::{CreateVenue, Venue, VenueStatus};
use arena_core::repository::VenueRepository;
use chrono::Utc;
use uuid::Uuid;

use crate::db::MemoryDb;

#[derive(Clone)]
pub struct MemoryVenueRepository {
    db: MemoryDb,
}

impl MemoryVenueRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    fn filtered(&self, pred: impl Fn(&Venue) -> bool) -> Vec<Venue> {
        self.db
            .tables
            .venues
            .read()
            .values()
            .filter(|v| pred(v))
            .cloned()
            .collect()
    }
}

impl VenueRepository for MemoryVenueRepository {
    async fn create(&self, input: CreateVenue) -> ArenaResult<Venue> {
        let now = Utc::now();
        let venue = Venue {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            address: input.address,
            city: input.city,
            postal_code: input.postal_code,
            phone_number: input.phone_number,
            email: input.email,
            capacity: input.capacity,
            parking_capacity: input.parking_capacity,
            is_indoor: input.is_indoor,
            has_lighting: input.has_lighting,
            has_changing_rooms: input.has_changing_rooms,
            has_medical_room: input.has_medical_room,
            status: VenueStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.db
            .tables
            .venues
            .write()
            .insert(venue.id, venue.clone());
        Ok(venue)
    }

    async fn get_by_id(&self, id: Uuid) -> ArenaResult<Venue> {
        self.db
            .tables
            .venues
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| ArenaError::not_found("venue", id))
    }

    async fn save(&self, mut venue: Venue) -> ArenaResult<Venue> {
        let mut venues = self.db.tables.venues.write();
        let existing = venues
            .get(&venue.id)
            .ok_or_else(|| ArenaError::not_found("venue", venue.id))?;
        venue.created_at = existing.created_at;
        venue.updated_at = Utc::now();
        venues.insert(venue.id, venue.clone());
        Ok(venue)
    }

    async fn list(&self) -> ArenaResult<Vec<Venue>> {
        Ok(self.filtered(|_| true))
    }

    async fn list_by_status(&self, status: VenueStatus) -> ArenaResult<Vec<Venue>> {
        Ok(self.filtered(|v| v.status == status))
    }

    async fn list_by_city(&self, city: &str) -> ArenaResult<Vec<Venue>> {
        let city = city.to_lowercase();
        Ok(self.filtered(|v| {
            v.city
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == city)
        }))
    }

    async fn list_indoor(&self, is_indoor: bool) -> ArenaResult<Vec<Venue>> {
        Ok(self.filtered(|v| v.is_indoor == is_indoor))
    }

    async fn list_with_min_capacity(&self, min_capacity: u32) -> ArenaResult<Vec<Venue>> {
        Ok(self.filtered(|v| v.capacity.is_some_and(|c| c >= min_capacity)))
    }

    async fn search(&self, keyword: &str) -> ArenaResult<Vec<Venue>> {
        let needle = keyword.to_lowercase();
        Ok(self.filtered(|v| {
            v.name.to_lowercase().contains(&needle)
                || v.city
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
                || v.address
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&needle))
        }))
    }
}
