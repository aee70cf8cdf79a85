//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Database
//! failures are split into three kinds so callers can tell a missing row,
//! an unreachable database and a failed statement apart.

use std::time::Duration;

use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Database errors
    #[error("Database error")]
    Database(DbErr),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Query exceeded deadline of {0:?}")]
    Timeout(Duration),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Connection-level failures are reported as unavailability, a missing
/// record as `NotFound`; everything else is a statement execution error.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(e) => AppError::Unavailable(e.to_string()),
            DbErr::Conn(e) => AppError::Unavailable(e.to_string()),
            DbErr::RecordNotFound(_) => AppError::NotFound,
            other => AppError::Database(other),
        }
    }
}

/// Error body printed by the CLI
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Unavailable(_) => "DATABASE_UNAVAILABLE",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code for the CLI (sysexits-style)
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => 65,
            AppError::NotFound => 66,
            AppError::Unavailable(_) | AppError::Timeout(_) => 69,
            AppError::Conflict(_) => 73,
            AppError::Database(_) | AppError::Internal(_) => 70,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => format!("Invalid input: {}", msg),
            AppError::Conflict(msg) => format!("{} already exists", msg),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Unavailable(msg) => {
                tracing::error!("Database unavailable: {}", msg);
                "The database is unavailable".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }

    /// Build the serializable error body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
