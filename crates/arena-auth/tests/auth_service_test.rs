//! Integration tests for the authentication service.

use arena_auth::config::AuthConfig;
use arena_auth::service::AuthService;
use arena_auth::{password, token};
use arena_core::error::ArenaError;
use arena_core::models::user::{CreateUser, User, UserRole, UserStatus};
use arena_core::repository::UserRepository;
use arena_store::{MemoryDb, MemoryUserRepository};
use chrono::Utc;
use uuid::Uuid;

fn test_config() -> AuthConfig {
    AuthConfig::new("integration-test-secret-0123456789", 3600)
}

/// Create the store and a single active user.
async fn setup() -> (MemoryUserRepository, User) {
    let db = MemoryDb::new();
    let user_repo = MemoryUserRepository::new(db);

    let user = user_repo
        .create(CreateUser {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: password::hash_password("correct-horse-battery").unwrap(),
            first_name: "Alice".into(),
            last_name: "Anders".into(),
            phone_number: None,
            role: UserRole::Athlete,
        })
        .await
        .unwrap();

    (user_repo, user)
}

#[tokio::test]
async fn login_happy_path() {
    let (user_repo, user) = setup().await;
    let config = test_config();
    let svc = AuthService::new(user_repo, config.clone());

    let result = svc.login("alice", "correct-horse-battery").await.unwrap();

    let access_token = result.access_token.unwrap();
    assert!(result.refresh_token.is_some());
    assert_eq!(result.username.as_deref(), Some("alice"));
    assert_eq!(result.role.as_deref(), Some("Athlete"));

    let claims = token::decode_access_token(&access_token, &config).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.role, UserRole::Athlete);
}

#[tokio::test]
async fn login_wrong_password() {
    let (user_repo, _) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let err = svc.login("alice", "wrong-password").await.unwrap_err();
    assert!(
        matches!(err, ArenaError::AuthenticationFailed { .. }),
        "expected AuthenticationFailed, got: {err:?}"
    );
}

#[tokio::test]
async fn login_unknown_user() {
    let (user_repo, _) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let err = svc.login("nobody", "irrelevant").await.unwrap_err();
    assert!(matches!(err, ArenaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn login_inactive_account() {
    let (user_repo, mut user) = setup().await;

    user.status = UserStatus::Inactive;
    user_repo.save(user).await.unwrap();

    let svc = AuthService::new(user_repo, test_config());
    let err = svc
        .login("alice", "correct-horse-battery")
        .await
        .unwrap_err();
    assert!(matches!(err, ArenaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn login_deleted_account() {
    let (user_repo, mut user) = setup().await;

    user.status = UserStatus::Deleted;
    user_repo.save(user).await.unwrap();

    let svc = AuthService::new(user_repo, test_config());
    let err = svc
        .login("alice", "correct-horse-battery")
        .await
        .unwrap_err();
    assert!(matches!(err, ArenaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn refresh_issues_new_pair() {
    let (user_repo, _) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let session = svc.login("alice", "correct-horse-battery").await.unwrap();
    let refreshed = svc
        .refresh(session.refresh_token.as_deref().unwrap())
        .await
        .unwrap();

    assert!(refreshed.access_token.is_some());
    assert!(refreshed.refresh_token.is_some());
    assert_eq!(refreshed.username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn refresh_reflects_current_role() {
    let (user_repo, mut user) = setup().await;
    let config = test_config();
    let svc = AuthService::new(user_repo.clone(), config.clone());

    let session = svc.login("alice", "correct-horse-battery").await.unwrap();

    // Promote the user after the refresh token was issued.
    user.role = UserRole::Organizer;
    user_repo.save(user).await.unwrap();

    let refreshed = svc
        .refresh(session.refresh_token.as_deref().unwrap())
        .await
        .unwrap();

    assert_eq!(refreshed.role.as_deref(), Some("Organizer"));
    let claims =
        token::decode_access_token(refreshed.access_token.as_deref().unwrap(), &config).unwrap();
    assert_eq!(claims.role, UserRole::Organizer);
}

#[tokio::test]
async fn refresh_with_garbage_token() {
    let (user_repo, _) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let err = svc.refresh("definitely-not-a-jwt").await.unwrap_err();
    assert!(matches!(err, ArenaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn logout_does_not_invalidate_tokens() {
    let (user_repo, _) = setup().await;
    let config = test_config();
    let svc = AuthService::new(user_repo, config.clone());

    let session = svc.login("alice", "correct-horse-battery").await.unwrap();
    let refresh_token = session.refresh_token.unwrap();

    svc.logout(&refresh_token).await.unwrap();

    // No revocation list exists: the token remains verifiable.
    assert!(token::decode_refresh_token(&refresh_token, &config).is_ok());
    assert!(svc.refresh(&refresh_token).await.is_ok());
}

#[tokio::test]
async fn current_user_happy_path() {
    let (user_repo, user) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let session = svc.login("alice", "correct-horse-battery").await.unwrap();
    let header = format!("Bearer {}", session.access_token.unwrap());

    let principal = svc.current_user(Some(&header)).await.unwrap();
    assert_eq!(principal.user_id, user.id);
    assert_eq!(principal.username, "alice");
    assert_eq!(principal.role, UserRole::Athlete);
}

#[tokio::test]
async fn current_user_missing_header() {
    let (user_repo, _) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let err = svc.current_user(None).await.unwrap_err();
    assert!(matches!(err, ArenaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn current_user_wrong_prefix() {
    let (user_repo, _) = setup().await;
    let svc = AuthService::new(user_repo, test_config());

    let session = svc.login("alice", "correct-horse-battery").await.unwrap();
    let header = format!("Token {}", session.access_token.unwrap());

    let err = svc.current_user(Some(&header)).await.unwrap_err();
    assert!(matches!(err, ArenaError::AuthenticationFailed { .. }));
}

#[tokio::test]
async fn current_user_for_vanished_account() {
    let (user_repo, _) = setup().await;
    let config = test_config();
    let svc = AuthService::new(user_repo, config.clone());

    // A structurally valid token for an account the store never had.
    let now = Utc::now();
    let ghost = User {
        id: Uuid::new_v4(),
        username: "ghost".into(),
        email: "ghost@example.com".into(),
        password_hash: String::new(),
        first_name: "Gone".into(),
        last_name: "Ghost".into(),
        phone_number: None,
        role: UserRole::Athlete,
        status: UserStatus::Active,
        created_at: now,
        updated_at: now,
    };
    let access_token = token::issue_access_token(&ghost, &config).unwrap();
    let header = format!("Bearer {access_token}");

    let err = svc.current_user(Some(&header)).await.unwrap_err();
    assert!(matches!(err, ArenaError::AuthenticationFailed { .. }));
}
