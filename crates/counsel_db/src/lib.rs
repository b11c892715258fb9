//! Database integration for Counsel
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library. MySQL is the production backend;
//! SQLite is available behind a feature flag for local development and tests.
//!
//! # Features
//!
//! - Database agnostic design
//! - Connection pooling
//! - Integration with the Counsel configuration system
//! - Repositories for counselors, users and appointments
//!
//! # Example
//!
//! ```rust,no_run
//! use counsel_config::AppConfig;
//! use counsel_db::DbClient;
//! use std::sync::Arc;
//!
//! async fn setup_db(config: Arc<AppConfig>) -> Result<DbClient, Box<dyn std::error::Error>> {
//!     let db_client = DbClient::new(&config).await?;
//!     Ok(db_client)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;

// Re-export the client and error for ease of use
pub use client::DbClient;
pub use error::DbError;

// Re-export the repository traits and implementations for ease of use
pub use repositories::{
    AppointmentRepository, CounselorRepository, NewAppointment, SqlAppointmentRepository,
    SqlCounselorRepository, SqlUserRepository, UserRepository,
};

// Re-export the shared domain models next to the repositories that load them
pub use counsel_common::models::{
    Appointment, AppointmentForCounselor, AppointmentForUser, AppointmentStatus, Counselor, User,
};

#[cfg(test)]
mod repositories_test;
