//! In-memory user store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use entities::{NewUser, User};
use tokio::sync::RwLock;

use crate::{demo_users, UserFilter, UserStore, UserStoreError, UserStoreResult};

/// In-memory user store. Records live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserStore {
    /// Creates an empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given users, in order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Creates a store preloaded with the demo users.
    pub fn seeded() -> Self {
        Self::with_users(demo_users())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self, filter: UserFilter) -> UserStoreResult<Vec<User>> {
        let users = self.users.read().await;
        let matching = users
            .iter()
            .filter(|u| filter.role().map_or(true, |role| u.has_role(role)))
            .cloned();

        let result: Vec<User> = match filter.limit() {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        };

        Ok(result)
    }

    async fn get_user(&self, id: u64) -> UserStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, draft: NewUser) -> UserStoreResult<User> {
        draft
            .validate()
            .map_err(|msg| UserStoreError::Invalid(msg.to_string()))?;

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == draft.email) {
            return Err(UserStoreError::already_exists("User", "email", draft.email));
        }

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::from_draft(id, draft);
        users.push(user.clone());

        tracing::debug!(user_id = user.id, total = users.len(), "User stored");

        Ok(user)
    }

    async fn count_users(&self) -> UserStoreResult<usize> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use entities::{ROLE_ADMIN, ROLE_MODERATOR};

    use super::*;

    #[tokio::test]
    async fn test_user_crud() {
        let store = MemoryUserStore::new();

        // Create
        let created = store
            .create_user(NewUser::new("Test User", "test@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.role, "user");

        // Get
        let fetched = store.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        // List
        let users = store.list_users(UserFilter::default()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(store.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let store = MemoryUserStore::seeded();
        assert!(store.get_user(999).await.unwrap().is_none());
        assert!(store.get_user(0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_role() {
        let store = MemoryUserStore::seeded();

        let filter = UserFilter {
            role: Some(ROLE_ADMIN.to_string()),
            ..Default::default()
        };
        let admins = store.list_users(filter).await.unwrap();
        assert_eq!(admins.len(), 1);
        assert!(admins.iter().all(|u| u.role == ROLE_ADMIN));

        let filter = UserFilter {
            role: Some("owner".to_string()),
            ..Default::default()
        };
        assert!(store.list_users(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_applies_limit_after_role() {
        let store = MemoryUserStore::seeded();

        let filter = UserFilter {
            role: Some("user".to_string()),
            limit: Some(2),
        };
        let users = store.list_users(filter).await.unwrap();
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_list_ignores_empty_role_and_zero_limit() {
        let store = MemoryUserStore::seeded();

        let filter = UserFilter {
            role: Some(String::new()),
            limit: Some(0),
        };
        assert_eq!(store.list_users(filter).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let store = MemoryUserStore::seeded();

        let user = store
            .create_user(NewUser::new("Test User", "test@example.com").with_role(ROLE_MODERATOR))
            .await
            .unwrap();
        assert_eq!(user.id, 6);
        assert_eq!(user.role, ROLE_MODERATOR);
        assert!(user.avatar.contains("ui-avatars.com"));

        let users = store.list_users(UserFilter::default()).await.unwrap();
        assert_eq!(users.last().map(|u| u.id), Some(6));
    }

    #[tokio::test]
    async fn test_create_uses_max_id_not_count() {
        let mut users = demo_users();
        users.retain(|u| u.id != 2);
        let store = MemoryUserStore::with_users(users);

        let user = store
            .create_user(NewUser::new("Test User", "test@example.com"))
            .await
            .unwrap();
        assert_eq!(user.id, 6);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let store = MemoryUserStore::seeded();

        let err = store
            .create_user(NewUser::new("Duplicate User", "john@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserStoreError::AlreadyExists { field: "email", .. }));
        assert_eq!(store.count_users().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let store = MemoryUserStore::new();

        let err = store
            .create_user(NewUser::new("Test User", ""))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            UserStoreError::Invalid("Name and email are required".to_string())
        );
        assert_eq!(store.count_users().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_same_email() {
        let store = Arc::new(MemoryUserStore::seeded());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .create_user(NewUser::new(format!("Racer {i}"), "race@example.com"))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.count_users().await.unwrap(), 6);
    }
}
