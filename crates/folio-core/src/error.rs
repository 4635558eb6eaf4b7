//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, key: String },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(key: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            key: key.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                key: String::new(),
            },
            RepoError::Constraint(msg) => DomainError::Conflict(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::post_not_found("abc");
        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn test_constraint_becomes_conflict() {
        let err: DomainError = RepoError::Constraint("slug taken".to_string()).into();
        assert!(matches!(err, DomainError::Conflict(msg) if msg == "slug taken"));
    }

    #[test]
    fn test_query_error_keeps_raw_message() {
        let err: DomainError = RepoError::Query("connection reset".to_string()).into();
        assert_eq!(err.to_string(), "connection reset");
    }
}
