//! User-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role granted full administrative access.
pub const ROLE_ADMIN: &str = "admin";
/// Role for regular members.
pub const ROLE_USER: &str = "user";
/// Role for community moderators.
pub const ROLE_MODERATOR: &str = "moderator";
/// Role assigned when a new user is created without one.
pub const DEFAULT_ROLE: &str = ROLE_USER;

/// Base URL of the avatar rendering service.
const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";
/// Background colour used for avatars of newly created users.
const AVATAR_BACKGROUND: &str = "0d6efd";
/// Foreground colour used for all generated avatars.
const AVATAR_COLOR: &str = "fff";

/// Message returned when a draft is missing its name or email.
pub const MISSING_FIELDS_MESSAGE: &str = "Name and email are required";

/// A user record held in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, monotonically assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address, unique across the directory.
    pub email: String,
    /// Free-form role (`admin`, `user` or `moderator` by convention).
    pub role: String,
    /// When this record was created. Never changes afterwards.
    pub created_at: DateTime<Utc>,
    /// Avatar image URL derived from the name.
    pub avatar: String,
}

impl User {
    /// Builds a record from a validated draft, stamping the creation time.
    pub fn from_draft(id: u64, draft: NewUser) -> Self {
        let avatar = avatar_url(&draft.name);
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            created_at: Utc::now(),
            avatar,
        }
    }

    /// Returns true if the user holds the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// Fields supplied by a client when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl NewUser {
    /// Creates a draft with the default role.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Checks that both name and email are present.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        Ok(())
    }
}

/// Returns the avatar URL for a display name.
pub fn avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_BASE_URL}?name={}&background={AVATAR_BACKGROUND}&color={AVATAR_COLOR}",
        urlencoding::encode(name)
    )
}
