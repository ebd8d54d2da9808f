//! User store error types.

use thiserror::Error;

/// Errors that can occur during user store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    /// Entity not found.
    #[error("{entity_type} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// An entity with the same unique field already exists.
    #[error("{entity_type} with this {field} already exists")]
    AlreadyExists {
        entity_type: &'static str,
        field: &'static str,
        value: String,
    },

    /// The entity failed validation.
    #[error("{0}")]
    Invalid(String),
}

impl UserStoreError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an already exists error.
    pub fn already_exists(
        entity_type: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::AlreadyExists {
            entity_type,
            field,
            value: value.into(),
        }
    }
}

/// Result type for user store operations.
pub type UserStoreResult<T> = Result<T, UserStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UserStoreError::not_found("User", "999").to_string(),
            "User not found"
        );
        assert_eq!(
            UserStoreError::already_exists("User", "email", "john@example.com").to_string(),
            "User with this email already exists"
        );
    }
}
