//! User service.
//!
//! Username and email are unique; passwords are hashed with
//! Argon2id before storage; deletion is soft (status `Deleted`).

use arena_auth::password;
use arena_core::error::{ArenaError, ArenaResult};
use arena_core::models::user::{CreateUser, UpdateUser, User, UserRole, UserStatus};
use arena_core::repository::UserRepository;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// Registration input with a raw password.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    /// Self-registration defaults to `Athlete` when absent.
    pub role: Option<UserRole>,
}

/// Update input with an optional raw password replacement.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

pub struct UserService<U> {
    users: U,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    pub async fn create(&self, input: RegisterUser) -> ArenaResult<User> {
        if self.users.exists_by_username(&input.username).await? {
            return Err(ArenaError::AlreadyExists {
                entity: "user".into(),
                value: input.username,
            });
        }
        if self.users.exists_by_email(&input.email).await? {
            return Err(ArenaError::AlreadyExists {
                entity: "user".into(),
                value: input.email,
            });
        }

        let password_hash = password::hash_password(&input.password)?;
        let user = self
            .users
            .create(CreateUser {
                username: input.username,
                email: input.email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
                phone_number: input.phone_number,
                role: input.role.unwrap_or(UserRole::Athlete),
            })
            .await?;

        info!(id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub async fn update(&self, id: Uuid, request: UpdateUserRequest) -> ArenaResult<User> {
        let mut user = self.users.get_by_id(id).await?;

        let update = UpdateUser {
            email: request.email,
            password_hash: match request.password.as_deref() {
                Some(raw) if !raw.is_empty() => Some(password::hash_password(raw)?),
                _ => None,
            },
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
            role: request.role,
            status: request.status,
        };

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(phone_number) = update.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(status) = update.status {
            user.status = status;
        }

        let user = self.users.save(user).await?;
        info!(id = %user.id, username = %user.username, "user updated");
        Ok(user)
    }

    pub async fn change_status(&self, id: Uuid, status: UserStatus) -> ArenaResult<User> {
        let mut user = self.users.get_by_id(id).await?;
        user.status = status;

        let user = self.users.save(user).await?;
        info!(id = %user.id, status = ?user.status, "user status changed");
        Ok(user)
    }

    /// Soft delete: status becomes `Deleted`; the record stays.
    pub async fn delete(&self, id: Uuid) -> ArenaResult<User> {
        self.change_status(id, UserStatus::Deleted).await
    }

    pub async fn get(&self, id: Uuid) -> ArenaResult<User> {
        self.users.get_by_id(id).await
    }

    pub async fn get_by_username(&self, username: &str) -> ArenaResult<User> {
        self.users.get_by_username(username).await
    }

    pub async fn get_by_email(&self, email: &str) -> ArenaResult<User> {
        self.users.get_by_email(email).await
    }

    pub async fn list(&self) -> ArenaResult<Vec<User>> {
        self.users.list().await
    }

    pub async fn list_by_role(&self, role: UserRole) -> ArenaResult<Vec<User>> {
        self.users.list_by_role(role).await
    }

    pub async fn list_by_status(&self, status: UserStatus) -> ArenaResult<Vec<User>> {
        self.users.list_by_status(status).await
    }

    pub async fn search(&self, keyword: &str) -> ArenaResult<Vec<User>> {
        self.users.search(keyword).await
    }
}
