//! Repository modules for database access
//!
//! This module contains repository traits and implementations for the
//! counselors, users and appointments tables.

pub mod appointments;
pub mod appointments_sql;
pub mod counselors;
pub mod counselors_sql;
pub mod users;
pub mod users_sql;

// Re-export the repository traits and implementations for ease of use
pub use appointments::{AppointmentRepository, NewAppointment};
pub use appointments_sql::SqlAppointmentRepository;
pub use counselors::CounselorRepository;
pub use counselors_sql::SqlCounselorRepository;
pub use users::UserRepository;
pub use users_sql::SqlUserRepository;
