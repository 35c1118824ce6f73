use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for the whole API surface.
///
/// Every variant maps onto exactly one HTTP status; handlers bubble these up
/// with `?` and never retry.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed field in a request payload.
    #[error("{0}")]
    Validation(String),

    /// Bad credential pair on login. Deliberately does not distinguish
    /// unknown user from wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed or expired bearer token.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated caller without the required role.
    #[error("{0}")]
    Forbidden(String),

    #[error("Employee not found")]
    EmployeeNotFound,

    /// The store rejected a write (constraint violation). The driver detail
    /// is surfaced to the caller.
    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("report rendering failed: {0}")]
    Report(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::EmployeeNotFound => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Token(_) | ApiError::Report(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}
