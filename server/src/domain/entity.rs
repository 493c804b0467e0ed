//! Entity trait and the error type shared by every layer of the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A persisted record addressed by a numeric row id.
pub trait Entity: Sized + Send + Sync + Clone {
    type Id: Copy + Eq + std::hash::Hash + Send + Sync + fmt::Display + 'static;

    fn id(&self) -> Self::Id;

    /// Human name used in "not found" messages, e.g. `Pet`
    const KIND: &'static str;
}

pub type DomainResult<T> = Result<T, DomainError>;

/// What went wrong, independent of transport.
///
/// Each variant maps onto one HTTP status in `crate::error::ApiError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Unauthorized(String),
    Internal(String),
}

impl DomainError {
    /// `"{kind} not found: {id}"`, the wording the UI shows verbatim
    pub fn not_found(kind: &str, id: impl fmt::Display) -> Self {
        DomainError::NotFound(format!("{} not found: {}", kind, id))
    }

    /// Missing record of entity type `E`
    pub fn missing<E: Entity>(id: E::Id) -> Self {
        Self::not_found(E::KIND, id)
    }

    /// Wrap a storage or hashing failure
    pub fn internal(err: impl fmt::Display) -> Self {
        DomainError::Internal(err.to_string())
    }

    /// The bare message, without the kind prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            DomainError::NotFound(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Conflict(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            DomainError::NotFound(_) => "Not found",
            DomainError::InvalidInput(_) => "Invalid input",
            DomainError::Conflict(_) => "Conflict",
            DomainError::Unauthorized(_) => "Unauthorized",
            DomainError::Internal(_) => "Internal error",
        };
        write!(f, "{}: {}", kind, self.message())
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_wording() {
        assert_eq!(
            DomainError::not_found("Pet", 7),
            DomainError::NotFound("Pet not found: 7".into())
        );
    }

    #[test]
    fn test_display_prefixes_kind() {
        let err = DomainError::Conflict("Username already taken".into());
        assert_eq!(err.to_string(), "Conflict: Username already taken");
        assert_eq!(err.message(), "Username already taken");
    }
}
