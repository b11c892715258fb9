//! Error types for the appointment lifecycle

use counsel_common::error::AppError;
use counsel_common::models::AppointmentStatus;
use counsel_db::DbError;
use thiserror::Error;

/// Errors produced by the appointment lifecycle logic.
#[derive(Debug, Error)]
pub enum AppointmentError {
    /// Caller input failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The referenced appointment does not exist
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The requested status change is not allowed from the current status
    #[error("Cannot change appointment status from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    /// Error from the database layer
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbError),
}

impl From<AppointmentError> for AppError {
    fn from(error: AppointmentError) -> Self {
        match error {
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::NotFoundError(msg) => AppError::NotFoundError(msg),
            AppointmentError::InvalidTransition { .. } => AppError::ConflictError(error.to_string()),
            AppointmentError::DatabaseError(e) => AppError::DatabaseError(e.to_string()),
        }
    }
}
