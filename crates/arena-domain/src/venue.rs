//! Venue service.
//!
//! Venues carry no transition table — status is a plain field.

use arena_core::error::ArenaResult;
use arena_core::models::venue::{CreateVenue, UpdateVenue, Venue, VenueStatus};
use arena_core::repository::VenueRepository;
use tracing::info;
use uuid::Uuid;

pub struct VenueService<V> {
    venues: V,
}

impl<V: VenueRepository> VenueService<V> {
    pub fn new(venues: V) -> Self {
        Self { venues }
    }

    pub async fn create(&self, input: CreateVenue) -> ArenaResult<Venue> {
        let venue = self.venues.create(input).await?;
        info!(id = %venue.id, name = %venue.name, "venue created");
        Ok(venue)
    }

    pub async fn update(&self, id: Uuid, update: UpdateVenue) -> ArenaResult<Venue> {
        let mut venue = self.venues.get_by_id(id).await?;

        if let Some(name) = update.name {
            venue.name = name;
        }
        if let Some(description) = update.description {
            venue.description = description;
        }
        if let Some(address) = update.address {
            venue.address = address;
        }
        if let Some(city) = update.city {
            venue.city = city;
        }
        if let Some(postal_code) = update.postal_code {
            venue.postal_code = postal_code;
        }
        if let Some(phone_number) = update.phone_number {
            venue.phone_number = phone_number;
        }
        if let Some(email) = update.email {
            venue.email = email;
        }
        if let Some(capacity) = update.capacity {
            venue.capacity = capacity;
        }
        if let Some(parking_capacity) = update.parking_capacity {
            venue.parking_capacity = parking_capacity;
        }
        if let Some(is_indoor) = update.is_indoor {
            venue.is_indoor = is_indoor;
        }
        if let Some(has_lighting) = update.has_lighting {
            venue.has_lighting = has_lighting;
        }
        if let Some(has_changing_rooms) = update.has_changing_rooms {
            venue.has_changing_rooms = has_changing_rooms;
        }
        if let Some(has_medical_room) = update.has_medical_room {
            venue.has_medical_room = has_medical_room;
        }
        if let Some(status) = update.status {
            venue.status = status;
        }

        let venue = self.venues.save(venue).await?;
        info!(id = %venue.id, name = %venue.name, "venue updated");
        Ok(venue)
    }

    pub async fn get(&self, id: Uuid) -> ArenaResult<Venue> {
        self.venues.get_by_id(id).await
    }

    pub async fn list(&self) -> ArenaResult<Vec<Venue>> {
        self.venues.list().await
    }

    pub async fn list_by_status(&self, status: VenueStatus) -> ArenaResult<Vec<Venue>> {
        self.venues.list_by_status(status).await
    }

    pub async fn list_by_city(&self, city: &str) -> ArenaResult<Vec<Venue>> {
        self.venues.list_by_city(city).await
    }

    pub async fn list_indoor(&self, is_indoor: bool) -> ArenaResult<Vec<Venue>> {
        self.venues.list_indoor(is_indoor).await
    }

    pub async fn list_with_min_capacity(&self, min_capacity: u32) -> ArenaResult<Vec<Venue>> {
        self.venues.list_with_min_capacity(min_capacity).await
    }

    pub async fn search(&self, keyword: &str) -> ArenaResult<Vec<Venue>> {
        self.venues.search(keyword).await
    }
}
