//! In-memory implementation of [`UserRepository`].

use arena_core::error::{ArenaError, ArenaResult};
use arena_core::models::user::{CreateUser, User, UserRole, UserStatus};
use arena_core::repository::UserRepository;
use chrono::Utc;
use uuid::Uuid;

use crate::db::MemoryDb;

#[derive(Clone)]
pub struct MemoryUserRepository {
    db: MemoryDb,
}

impl MemoryUserRepository {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, input: CreateUser) -> ArenaResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            password_hash: input.password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            phone_number: input.phone_number,
            role: input.role,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.db
            .tables
            .users
            .write()
            .insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> ArenaResult<User> {
        self.db
            .tables
            .users
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| ArenaError::not_found("user", id))
    }

    async fn get_by_username(&self, username: &str) -> ArenaResult<User> {
        self.db
            .tables
            .users
            .read()
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| ArenaError::not_found("user", username))
    }

    async fn get_by_email(&self, email: &str) -> ArenaResult<User> {
        self.db
            .tables
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| ArenaError::not_found("user", email))
    }

    async fn exists_by_username(&self, username: &str) -> ArenaResult<bool> {
        Ok(self
            .db
            .tables
            .users
            .read()
            .values()
            .any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> ArenaResult<bool> {
        Ok(self
            .db
            .tables
            .users
            .read()
            .values()
            .any(|u| u.email == email))
    }

    async fn save(&self, mut user: User) -> ArenaResult<User> {
        let mut users = self.db.tables.users.write();
        let existing = users
            .get(&user.id)
            .ok_or_else(|| ArenaError::not_found("user", user.id))?;
        user.created_at = existing.created_at;
        user.updated_at = Utc::now();
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> ArenaResult<Vec<User>> {
        Ok(self.db.tables.users.read().values().cloned().collect())
    }

    async fn list_by_role(&self, role: UserRole) -> ArenaResult<Vec<User>> {
        Ok(self
            .db
            .tables
            .users
            .read()
            .values()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: UserStatus) -> ArenaResult<Vec<User>> {
        Ok(self
            .db
            .tables
            .users
            .read()
            .values()
            .filter(|u| u.status == status)
            .cloned()
            .collect())
    }

    async fn search(&self, keyword: &str) -> ArenaResult<Vec<User>> {
        let needle = keyword.to_lowercase();
        Ok(self
            .db
            .tables
            .users
            .read()
            .values()
            .filter(|u| {
                u.username.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
                    || u.first_name.to_lowercase().contains(&needle)
                    || u.last_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}
