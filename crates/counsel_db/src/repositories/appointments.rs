//! Repository for appointment lifecycle state

use crate::error::DbError;

pub use counsel_common::models::{
    Appointment, AppointmentForCounselor, AppointmentForUser, AppointmentStatus,
};

/// A new appointment request, before it has an id.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub counselor_id: i64,
    pub user_id: i64,
    pub appointment_datetime: String,
    pub message: Option<String>,
}

/// Repository for appointments.
///
/// Rows always enter as `pending`; every later mutation is a single-column
/// update so the lifecycle logic can detect missing rows from the affected
/// row count.
pub trait AppointmentRepository {
    /// Initialize the database schema
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Insert a new pending appointment and return its generated id.
    fn insert(
        &self,
        appointment: &NewAppointment,
    ) -> impl std::future::Future<Output = Result<i64, DbError>> + Send;

    /// Find an appointment by id
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Appointment>, DbError>> + Send;

    /// List a counselor's appointments, newest first, with requester names.
    fn list_for_counselor(
        &self,
        counselor_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<AppointmentForCounselor>, DbError>> + Send;

    /// List a user's appointments, newest first, with counselor names.
    fn list_for_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<AppointmentForUser>, DbError>> + Send;

    /// Set the status of an appointment.
    ///
    /// # Returns
    ///
    /// `true` if a row was updated, `false` if no appointment matched the id
    fn update_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;

    /// Attach a meeting link to an appointment.
    ///
    /// # Returns
    ///
    /// `true` if a row was updated, `false` if no appointment matched the id
    fn set_meeting_link(
        &self,
        id: i64,
        meeting_link: &str,
    ) -> impl std::future::Future<Output = Result<bool, DbError>> + Send;
}
