//! User store trait definitions.

use async_trait::async_trait;
use entities::{NewUser, User};

use crate::UserStoreResult;

/// Filter options for listing users.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Keep only users with exactly this role. Empty means no filter.
    pub role: Option<String>,
    /// Maximum number of results. Zero means no limit.
    pub limit: Option<usize>,
}

impl UserFilter {
    /// Returns the role to filter by, if any.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|role| !role.is_empty())
    }

    /// Returns the effective limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit.filter(|limit| *limit > 0)
    }
}

/// Trait for user storage operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Lists users in insertion order, filtered by role then truncated to the limit.
    async fn list_users(&self, filter: UserFilter) -> UserStoreResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: u64) -> UserStoreResult<Option<User>>;

    /// Creates a user from a draft.
    ///
    /// Fails with [`UserStoreError::Invalid`](crate::UserStoreError::Invalid) if
    /// the name or email is empty and with
    /// [`UserStoreError::AlreadyExists`](crate::UserStoreError::AlreadyExists)
    /// if the email is taken. The new user gets the current maximum id plus one.
    async fn create_user(&self, draft: NewUser) -> UserStoreResult<User>;

    /// Returns the number of stored users.
    async fn count_users(&self) -> UserStoreResult<usize>;
}
