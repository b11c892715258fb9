use std::fmt;
use thiserror::Error;

/// The base error type for all Counsel errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for AppError.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error occurred during validation of caller input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to a conflict (e.g., an invalid status transition)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred during a database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during an external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AppError {
    fn status_code(&self) -> u16 {
        match self {
            AppError::ValidationError(_) => 400,
            AppError::NotFoundError(_) => 404,
            AppError::ConflictError(_) => 409,
            AppError::DatabaseError(_) => 500,
            // Provider failures surface generically; internal detail stays in the logs.
            AppError::ExternalServiceError { .. } => 500,
            AppError::ConfigError(_) => 500,
            AppError::InternalError(_) => 500,
        }
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> AppError {
    AppError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> AppError {
    AppError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> AppError {
    AppError::ConflictError(message.to_string())
}

pub fn database_error<T: fmt::Display>(message: T) -> AppError {
    AppError::DatabaseError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> AppError {
    AppError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> AppError {
    AppError::ConfigError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> AppError {
    AppError::InternalError(message.to_string())
}
