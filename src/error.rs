//!
//! # Error Handling
//!
//! `AppError` is the single error type returned by services and handlers. It
//! implements `actix_web::error::ResponseError`, so every failure leaves the
//! server as a JSON envelope of the form `{"message": .., "error": ..}` where
//! `error` is only present for server-side failures.
//!
//! `StoreError` covers the persistence layer. A uniqueness violation is kept
//! distinct from every other database failure so services can turn it into a
//! conflict instead of a 500.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Database(sqlx::Error),
    /// The backend could not turn the search query into a filter.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate(db.constraint().unwrap_or("unique").to_string())
            }
            _ => StoreError::Database(error),
        }
    }
}

/// Represents all errors a request can end in.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty required fields, or an unreadable body (HTTP 400).
    #[error("Validation Error: {0}")]
    Validation(String),
    /// Duplicate email or headword (HTTP 400).
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Bad credentials or missing token (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Unknown resource (HTTP 404).
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Persistence failure (HTTP 500). `context` is the client-facing message.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
    /// Any other unexpected failure (HTTP 500).
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| {
            log::error!("{}: {}", context, source);
            AppError::Store { context, source }
        }
    }

    /// The client-facing message carried in the `message` field.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::Store { context, .. } => (*context).to_string(),
            AppError::Internal(_) => "Server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Store { source, .. } => json!({
                "message": self.message(),
                "error": source.to_string(),
            }),
            AppError::Internal(detail) => json!({
                "message": self.message(),
                "error": detail,
            }),
            _ => json!({ "message": self.message() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Token encoding or decoding failed.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Internal(format!("Token error: {}", error))
    }
}

/// Password hashing or verification failed.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(format!("Password hashing error: {}", error))
    }
}
