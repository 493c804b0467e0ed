//! HTTP error mapping
//!
//! Every failure leaves the server as
//! `{"status": 404, "error": "Not Found", "message": "..."}`. Validation
//! failures add an `errors` map of field -> message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::validation::FieldErrors;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fail with `Validation` when `errors` is non-empty
    pub fn check(errors: FieldErrors) -> ApiResult<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::InvalidInput(msg) => ApiError::BadRequest(msg),
            DomainError::Conflict(msg) => ApiError::Conflict(msg),
            DomainError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, errors) = match self {
            ApiError::Validation(errors) => {
                warn!(?errors, "Request failed validation");
                ("Validation failed".to_string(), Some(errors))
            }
            ApiError::Internal(detail) => {
                error!("Internal error: {detail}");
                ("Internal server error".to_string(), None)
            }
            other => (other.to_string(), None),
        };

        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let cases = [
            (DomainError::NotFound("Pet not found: 7".into()), StatusCode::NOT_FOUND),
            (DomainError::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (DomainError::Conflict("Username already taken".into()), StatusCode::CONFLICT),
            (DomainError::Unauthorized("nope".into()), StatusCode::UNAUTHORIZED),
            (DomainError::Internal("db".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).status(), status);
        }
    }

    #[test]
    fn test_message_is_unprefixed() {
        let err = ApiError::from(DomainError::NotFound("Pet not found: 7".into()));
        assert_eq!(err.to_string(), "Pet not found: 7");
    }

    #[test]
    fn test_check() {
        assert!(ApiError::check(FieldErrors::new()).is_ok());
        let mut errors = FieldErrors::new();
        errors.insert("name".into(), "Name is required".into());
        assert!(matches!(ApiError::check(errors), Err(ApiError::Validation(_))));
    }
}
