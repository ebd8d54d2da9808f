//! Request and response types for the HTTP API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use entities::{DEFAULT_ROLE, NewUser, User};
use serde::{Deserialize, Serialize};
use user_store::UserFilter;

use crate::services::runtime::MemorySnapshot;

/// Version reported by `/health` and `/api`.
pub const API_VERSION: &str = "1.0.1";
/// Name reported by `/api`.
pub const API_NAME: &str = "User Directory API";

// ============================================================================
// Requests
// ============================================================================

/// Query string accepted by `GET /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
    /// Kept as text so that malformed values are ignored rather than rejected.
    pub limit: Option<String>,
}

impl ListUsersQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "role" => &mut query.role,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Converts the query into a store filter.
    pub fn into_filter(self) -> UserFilter {
        UserFilter {
            role: self.role.filter(|role| !role.is_empty()),
            limit: self
                .limit
                .as_deref()
                .and_then(parse_int_prefix)
                .filter(|limit| *limit > 0)
                .and_then(|limit| usize::try_from(limit).ok()),
        }
    }
}

/// Body accepted by `POST /api/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// Converts the request into a creation draft.
    ///
    /// Missing name or email become empty strings, which the store rejects.
    pub fn into_draft(self) -> NewUser {
        NewUser::new(self.name.unwrap_or_default(), self.email.unwrap_or_default())
            .with_role(self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()))
    }
}

/// Parses the leading integer of a string.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"5abc"` parses as 5. Returns `None` if no digits lead.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Overlong numbers saturate instead of failing.
    let value = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

// ============================================================================
// Responses
// ============================================================================

/// Response for `GET /api/users`.
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<User>,
    pub timestamp: DateTime<Utc>,
}

impl ListUsersResponse {
    pub fn new(data: Vec<User>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Response carrying a single user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub data: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl UserResponse {
    pub fn new(data: User) -> Self {
        Self {
            success: true,
            data,
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// Attaches a human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Uniform failure envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>, path: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            path,
            timestamp: Utc::now(),
        }
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Process uptime in seconds.
    pub uptime: f64,
    pub timestamp: DateTime<Utc>,
    pub memory: MemorySnapshot,
    pub version: &'static str,
    pub environment: String,
}

/// Response for `GET /api`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiIndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub timestamp: DateTime<Utc>,
}

impl ApiIndexResponse {
    pub fn new() -> Self {
        let endpoints = BTreeMap::from([
            (
                "GET /api/users",
                "Get all users (supports ?role=admin|user|moderator and ?limit=N)",
            ),
            ("GET /api/users/:id", "Get user by ID"),
            (
                "POST /api/users",
                "Create new user (requires name, email, optional role)",
            ),
        ]);

        Self {
            name: API_NAME,
            version: API_VERSION,
            endpoints,
            timestamp: Utc::now(),
        }
    }
}

impl Default for ApiIndexResponse {
    fn default() -> Self {
        Self::new()
    }
}
