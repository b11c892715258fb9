
// Declare modules within this crate
pub mod auth; // Authentication boundary (placeholder implementation)
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared domain models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, database_error, external_service_error, internal_error, not_found,
    validation_error, AppError, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{client::HTTP_CLIENT, IntoHttpResponse, ValidJson};

// Re-export the most commonly used models
pub use models::{
    Appointment, AppointmentForCounselor, AppointmentForUser, AppointmentStatus, Counselor, User,
};
