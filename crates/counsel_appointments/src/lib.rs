//! Appointment lifecycle for Counsel
//!
//! Appointments enter as `pending` and move through a fixed transition
//! table; every accepted change fans out best-effort email notifications
//! through the configured dispatcher.

pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use error::AppointmentError;
pub use handlers::AppointmentsState;
pub use routes::routes;
