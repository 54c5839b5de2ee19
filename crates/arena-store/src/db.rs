//! Shared in-memory table storage.

use std::collections::HashMap;
use std::sync::Arc;

use arena_core::models::{
    competition::Competition, matches::Match, participant::Participant, user::User, venue::Venue,
};
use parking_lot::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub(crate) struct Tables {
    pub users: RwLock<HashMap<Uuid, User>>,
    pub competitions: RwLock<HashMap<Uuid, Competition>>,
    pub matches: RwLock<HashMap<Uuid, Match>>,
    pub participants: RwLock<HashMap<Uuid, Participant>>,
    pub venues: RwLock<HashMap<Uuid, Venue>>,
}

/// Cheap-to-clone handle over the in-memory tables. Every repository
/// constructed from the same `MemoryDb` sees the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    pub(crate) tables: Arc<Tables>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}
