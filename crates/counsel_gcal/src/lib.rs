//! Google Calendar and Meet integration for Counsel
//!
//! Schedules a Google Meet video call for a confirmed appointment: a calendar
//! event with an attached Meet conference is created through a service
//! account, and the resulting link is stored on the appointment row.

pub mod auth;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use auth::{create_calendar_hub, HubType};
pub use handlers::GcalState;
pub use logic::{CreateMeetingRequest, GcalError, MeetingDetails};
pub use routes::routes;
