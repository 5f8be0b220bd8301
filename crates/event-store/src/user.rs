//! In-memory implementation of UserRepository

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;

use event_core::entities::User;
use event_core::traits::{RepoResult, UserRepository};

/// In-memory user directory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.insert(user);
        }
        repo
    }

    /// Add or replace a user
    pub fn insert(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Remove a user, returning it if present
    pub fn remove(&self, id: &str) -> Option<User> {
        self.users.remove(id).map(|(_, user)| user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }
}
