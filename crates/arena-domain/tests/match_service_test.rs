//! Integration tests for the match service.

use arena_core::error::ArenaError;
use arena_core::models::matches::{CreateMatch, MatchStatus, UpdateMatch};
use arena_core::models::user::{CreateUser, User, UserRole};
use arena_core::repository::UserRepository;
use arena_domain::MatchService;
use arena_store::{MemoryDb, MemoryMatchRepository, MemoryUserRepository};
use uuid::Uuid;

type Service = MatchService<MemoryMatchRepository, MemoryUserRepository>;

async fn setup() -> (Service, User, Uuid) {
    let db = MemoryDb::new();
    let users = MemoryUserRepository::new(db.clone());

    let referee = users
        .create(CreateUser {
            username: "ref".into(),
            email: "ref@example.com".into(),
            password_hash: String::new(),
            first_name: "Rita".into(),
            last_name: "Referee".into(),
            phone_number: None,
            role: UserRole::Referee,
        })
        .await
        .unwrap();

    let svc = MatchService::new(MemoryMatchRepository::new(db.clone()), users);
    (svc, referee, Uuid::new_v4())
}

fn round_one(competition_id: Uuid, referee_id: Option<Uuid>) -> CreateMatch {
    CreateMatch {
        competition_id,
        participant1_id: None,
        participant2_id: None,
        referee_id,
        match_date: None,
        duration_minutes: Some(90),
        match_number: Some(1),
        round_number: Some(1),
        court_number: Some(3),
        notes: None,
    }
}

#[tokio::test]
async fn create_starts_scheduled_with_zero_scores() {
    let (svc, referee, competition_id) = setup().await;

    let m = svc
        .create(round_one(competition_id, Some(referee.id)))
        .await
        .unwrap();

    assert_eq!(m.status, MatchStatus::Scheduled);
    assert_eq!(m.score_participant1, 0);
    assert_eq!(m.score_participant2, 0);
    assert_eq!(m.referee_id, Some(referee.id));
}

#[tokio::test]
async fn create_with_unknown_referee_saves_nothing() {
    let (svc, _, competition_id) = setup().await;

    let err = svc
        .create(round_one(competition_id, Some(Uuid::new_v4())))
        .await
        .unwrap_err();

    assert!(matches!(&err, ArenaError::NotFound { entity, .. } if entity == "referee"));
    assert!(svc.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn cancel_completed_match_is_rejected() {
    let (svc, _, competition_id) = setup().await;
    let m = svc.create(round_one(competition_id, None)).await.unwrap();

    svc.change_status(m.id, MatchStatus::InProgress)
        .await
        .unwrap();
    svc.change_status(m.id, MatchStatus::Completed)
        .await
        .unwrap();

    let err = svc.cancel(m.id).await.unwrap_err();
    assert!(matches!(
        err,
        ArenaError::IllegalTransition {
            entity: "match",
            ..
        }
    ));
}

#[tokio::test]
async fn postponed_match_can_return_to_scheduled() {
    let (svc, _, competition_id) = setup().await;
    let m = svc.create(round_one(competition_id, None)).await.unwrap();

    svc.change_status(m.id, MatchStatus::Postponed)
        .await
        .unwrap();
    let rescheduled = svc
        .change_status(m.id, MatchStatus::Scheduled)
        .await
        .unwrap();
    assert_eq!(rescheduled.status, MatchStatus::Scheduled);
}

#[tokio::test]
async fn scheduled_match_cannot_complete_directly() {
    let (svc, _, competition_id) = setup().await;
    let m = svc.create(round_one(competition_id, None)).await.unwrap();

    let err = svc
        .change_status(m.id, MatchStatus::Completed)
        .await
        .unwrap_err();
    assert!(matches!(err, ArenaError::IllegalTransition { .. }));
}

#[tokio::test]
async fn score_update_is_unconditional_on_status() {
    let (svc, _, competition_id) = setup().await;
    let m = svc.create(round_one(competition_id, None)).await.unwrap();

    svc.change_status(m.id, MatchStatus::InProgress)
        .await
        .unwrap();
    svc.change_status(m.id, MatchStatus::Completed)
        .await
        .unwrap();

    // Even a completed match accepts a score correction.
    let updated = svc.update_score(m.id, 21, 19).await.unwrap();
    assert_eq!(updated.score_participant1, 21);
    assert_eq!(updated.score_participant2, 19);
    assert_eq!(updated.status, MatchStatus::Completed);
}

#[tokio::test]
async fn update_gates_status_through_the_engine() {
    let (svc, _, competition_id) = setup().await;
    let m = svc.create(round_one(competition_id, None)).await.unwrap();

    let err = svc
        .update(
            m.id,
            UpdateMatch {
                status: Some(MatchStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ArenaError::IllegalTransition { .. }));

    let updated = svc
        .update(
            m.id,
            UpdateMatch {
                status: Some(MatchStatus::InProgress),
                notes: Some(Some("kickoff delayed 5 min".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, MatchStatus::InProgress);
    assert_eq!(updated.notes.as_deref(), Some("kickoff delayed 5 min"));
}

#[tokio::test]
async fn filtered_queries() {
    let (svc, referee, competition_id) = setup().await;

    let participant = Uuid::new_v4();
    let mut first = round_one(competition_id, Some(referee.id));
    first.participant1_id = Some(participant);
    svc.create(first).await.unwrap();

    let mut second = round_one(Uuid::new_v4(), None);
    second.round_number = Some(2);
    second.participant2_id = Some(participant);
    svc.create(second).await.unwrap();

    assert_eq!(svc.list_by_competition(competition_id).await.unwrap().len(), 1);
    assert_eq!(svc.list_by_referee(referee.id).await.unwrap().len(), 1);
    // Either slot counts.
    assert_eq!(svc.list_by_participant(participant).await.unwrap().len(), 2);
    assert_eq!(svc.list_by_round(1).await.unwrap().len(), 1);
    assert_eq!(svc.list_by_court(3).await.unwrap().len(), 2);
    assert_eq!(
        svc.list_by_competition_and_round(competition_id, 1)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        svc.list_by_competition_and_status(competition_id, MatchStatus::Scheduled)
            .await
            .unwrap()
            .len(),
        1
    );
}
