//! Demo users loaded into a fresh directory.

use chrono::{DateTime, Utc};
use entities::{User, ROLE_ADMIN, ROLE_MODERATOR, ROLE_USER};

/// 2024-01-01T00:00:00Z, the creation time of the first demo user.
const FIRST_CREATED_AT: i64 = 1_704_067_200;
const SECONDS_PER_DAY: i64 = 86_400;

/// (name, email, role, avatar background)
const DEMO_USERS: [(&str, &str, &str, &str); 5] = [
    ("John Doe", "john@example.com", ROLE_ADMIN, "0d6efd"),
    ("Jane Smith", "jane@example.com", ROLE_USER, "198754"),
    ("Bob Johnson", "bob@example.com", ROLE_USER, "dc3545"),
    ("Alice Wilson", "alice@example.com", ROLE_MODERATOR, "fd7e14"),
    ("Charlie Brown", "charlie@example.com", ROLE_USER, "6f42c1"),
];

/// Returns the demo users, created one day apart starting 2024-01-01.
pub fn demo_users() -> Vec<User> {
    DEMO_USERS
        .iter()
        .zip(0i64..)
        .map(|(&(name, email, role, background), offset)| User {
            id: offset as u64 + 1,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            created_at: DateTime::<Utc>::from_timestamp(
                FIRST_CREATED_AT + offset * SECONDS_PER_DAY,
                0,
            )
            .unwrap_or_default(),
            avatar: format!(
                "https://ui-avatars.com/api/?name={}&background={background}&color=fff",
                name.replace(' ', "+")
            ),
        })
        .collect()
}
