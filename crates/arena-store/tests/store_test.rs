//! Integration tests for the in-memory store.

use arena_core::error::ArenaError;
use arena_core::models::competition::{CompetitionStatus, CreateCompetition, SportType};
use arena_core::models::matches::{CreateMatch, MatchStatus};
use arena_core::models::user::{CreateUser, UserRole, UserStatus};
use arena_core::models::venue::CreateVenue;
use arena_core::repository::{
    CompetitionRepository, MatchRepository, UserRepository, VenueRepository,
};
use arena_store::{
    MemoryCompetitionRepository, MemoryDb, MemoryMatchRepository, MemoryUserRepository,
    MemoryVenueRepository,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

fn sample_user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.into(),
        email: email.into(),
        password_hash: "$argon2id$stub".into(),
        first_name: "Mete".into(),
        last_name: "Demir".into(),
        phone_number: None,
        role: UserRole::Athlete,
    }
}

fn sample_competition(name: &str) -> CreateCompetition {
    CreateCompetition {
        name: name.into(),
        description: None,
        sport_type: SportType::Swimming,
        start_date: None,
        end_date: None,
        registration_deadline: None,
        max_participants: None,
        min_age: None,
        max_age: None,
        gender_category: None,
        entry_fee: None,
        prize_pool: None,
        venue_id: None,
        organizer_id: None,
    }
}

fn sample_venue(name: &str, city: &str, capacity: Option<u32>, is_indoor: bool) -> CreateVenue {
    CreateVenue {
        name: name.into(),
        description: None,
        address: None,
        city: Some(city.into()),
        postal_code: None,
        phone_number: None,
        email: None,
        capacity,
        parking_capacity: None,
        is_indoor,
        has_lighting: true,
        has_changing_rooms: true,
        has_medical_room: false,
    }
}

#[tokio::test]
async fn save_preserves_created_at_and_refreshes_updated_at() {
    let repo = MemoryUserRepository::new(MemoryDb::new());
    let mut user = repo
        .create(sample_user("mete", "mete@example.com"))
        .await
        .unwrap();
    let created_at = user.created_at;

    user.first_name = "Metin".into();
    // A tampered created_at must not survive the save.
    user.created_at = created_at - Duration::days(30);
    let saved = repo.save(user).await.unwrap();

    assert_eq!(saved.created_at, created_at);
    assert!(saved.updated_at >= created_at);
    assert_eq!(saved.first_name, "Metin");
}

#[tokio::test]
async fn save_unknown_id_is_not_found() {
    let repo = MemoryUserRepository::new(MemoryDb::new());
    let mut ghost = repo
        .create(sample_user("mete", "mete@example.com"))
        .await
        .unwrap();
    ghost.id = Uuid::new_v4();

    let err = repo.save(ghost).await.unwrap_err();
    assert!(matches!(&err, ArenaError::NotFound { entity, .. } if entity == "user"));
}

#[tokio::test]
async fn exists_by_username_and_email() {
    let repo = MemoryUserRepository::new(MemoryDb::new());
    repo.create(sample_user("mete", "mete@example.com"))
        .await
        .unwrap();

    assert!(repo.exists_by_username("mete").await.unwrap());
    assert!(!repo.exists_by_username("meteor").await.unwrap());
    assert!(repo.exists_by_email("mete@example.com").await.unwrap());
    assert!(!repo.exists_by_email("other@example.com").await.unwrap());
}

#[tokio::test]
async fn user_search_is_case_insensitive() {
    let repo = MemoryUserRepository::new(MemoryDb::new());
    repo.create(sample_user("mete", "mete@example.com"))
        .await
        .unwrap();

    assert_eq!(repo.search("METE").await.unwrap().len(), 1);
    assert_eq!(repo.search("demir").await.unwrap().len(), 1);
    assert!(repo.search("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn user_status_queries_reflect_saves() {
    let repo = MemoryUserRepository::new(MemoryDb::new());
    let mut user = repo
        .create(sample_user("mete", "mete@example.com"))
        .await
        .unwrap();

    user.status = UserStatus::Inactive;
    repo.save(user).await.unwrap();

    assert!(repo.list_by_status(UserStatus::Active).await.unwrap().is_empty());
    assert_eq!(
        repo.list_by_status(UserStatus::Inactive).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn competition_date_windows() {
    let repo = MemoryCompetitionRepository::new(MemoryDb::new());
    let now = Utc::now();

    let mut next_week = sample_competition("Next Week Gala");
    next_week.start_date = Some(now + Duration::days(7));
    let next_week = repo.create(next_week).await.unwrap();

    let mut last_month = sample_competition("Last Month Meet");
    last_month.start_date = Some(now - Duration::days(30));
    repo.create(last_month).await.unwrap();

    repo.create(sample_competition("Undated Meet")).await.unwrap();

    let upcoming = repo.list_upcoming(now).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, next_week.id);

    let window = repo
        .list_starting_between(now, now + Duration::days(14))
        .await
        .unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].id, next_week.id);

    assert!(repo
        .list_starting_between(now - Duration::days(3), now)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn open_registrations_respect_status_and_deadline() {
    let repo = MemoryCompetitionRepository::new(MemoryDb::new());
    let now = Utc::now();

    let mut open = repo
        .create(sample_competition("Open Cup"))
        .await
        .unwrap();
    open.status = CompetitionStatus::RegistrationOpen;
    open.registration_deadline = Some(now + Duration::days(3));
    let open = repo.save(open).await.unwrap();

    let mut expired = repo
        .create(sample_competition("Expired Cup"))
        .await
        .unwrap();
    expired.status = CompetitionStatus::RegistrationOpen;
    expired.registration_deadline = Some(now - Duration::days(1));
    repo.save(expired).await.unwrap();

    // Planned, so never listed regardless of deadline.
    repo.create(sample_competition("Planned Cup")).await.unwrap();

    let listed = repo.list_open_registrations(now).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, open.id);
}

#[tokio::test]
async fn match_date_and_status_windows() {
    let repo = MemoryMatchRepository::new(MemoryDb::new());
    let now = Utc::now();
    let competition_id = Uuid::new_v4();

    let base = CreateMatch {
        competition_id,
        participant1_id: None,
        participant2_id: None,
        referee_id: None,
        match_date: Some(now + Duration::hours(2)),
        duration_minutes: None,
        match_number: None,
        round_number: None,
        court_number: None,
        notes: None,
    };

    let soon = repo.create(base.clone()).await.unwrap();

    let mut played = base.clone();
    played.match_date = Some(now - Duration::days(1));
    let mut played = repo.create(played).await.unwrap();
    played.status = MatchStatus::Completed;
    repo.save(played).await.unwrap();

    let upcoming = repo.list_upcoming(now).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, soon.id);

    let today = repo
        .list_between(now - Duration::days(2), now + Duration::days(1))
        .await
        .unwrap();
    assert_eq!(today.len(), 2);

    assert_eq!(
        repo.list_by_status(MatchStatus::Completed).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn venue_filters() {
    let repo = MemoryVenueRepository::new(MemoryDb::new());
    repo.create(sample_venue("Central Hall", "Ankara", Some(500), true))
        .await
        .unwrap();
    repo.create(sample_venue("Riverside Pitch", "Izmir", Some(2000), false))
        .await
        .unwrap();
    repo.create(sample_venue("Backyard Court", "Ankara", None, false))
        .await
        .unwrap();

    assert_eq!(repo.list_by_city("ANKARA").await.unwrap().len(), 2);
    assert_eq!(repo.list_indoor(true).await.unwrap().len(), 1);
    assert_eq!(repo.list_with_min_capacity(1000).await.unwrap().len(), 1);
    assert_eq!(repo.search("riverside").await.unwrap().len(), 1);
}

#[tokio::test]
async fn cloned_handles_share_state() {
    let db = MemoryDb::new();
    let writer = MemoryUserRepository::new(db.clone());
    let reader = MemoryUserRepository::new(db);

    let user = writer
        .create(sample_user("mete", "mete@example.com"))
        .await
        .unwrap();

    let seen = reader.get_by_id(user.id).await.unwrap();
    assert_eq!(seen.username, "mete");
}
