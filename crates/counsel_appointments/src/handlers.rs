//! Axum handlers for the appointment endpoints

use crate::logic::{
    appointments_for_counselor, appointments_for_user, request_appointment,
    set_appointment_status, CreateAppointmentRequest, UpdateStatusRequest,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use counsel_common::error::AppError;
use counsel_common::services::NotificationService;
use counsel_common::ValidJson;
use counsel_db::{
    AppointmentForCounselor, AppointmentForUser, SqlAppointmentRepository,
    SqlCounselorRepository, SqlUserRepository,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared state for the appointment handlers.
#[derive(Clone)]
pub struct AppointmentsState {
    pub appointments: SqlAppointmentRepository,
    pub counselors: SqlCounselorRepository,
    pub users: SqlUserRepository,
    /// Absent when notifications are disabled in config.
    pub notifier: Option<Arc<dyn NotificationService>>,
}

impl AppointmentsState {
    fn notifier(&self) -> Option<&dyn NotificationService> {
        self.notifier.as_deref()
    }
}

/// Handler for a client requesting an appointment.
#[axum::debug_handler]
pub async fn create_appointment_handler(
    State(state): State<Arc<AppointmentsState>>,
    ValidJson(payload): ValidJson<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let appointment_id = request_appointment(
        &state.appointments,
        &state.counselors,
        &state.users,
        state.notifier(),
        payload,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Appointment request created successfully",
            "appointmentId": appointment_id,
        })),
    ))
}

/// Handler listing a counselor's appointments for their dashboard.
#[axum::debug_handler]
pub async fn counselor_appointments_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(counselor_id): Path<i64>,
) -> Result<Json<Vec<AppointmentForCounselor>>, AppError> {
    let list = appointments_for_counselor(&state.appointments, counselor_id).await?;
    Ok(Json(list))
}

/// Handler listing a user's appointments.
#[axum::debug_handler]
pub async fn user_appointments_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<AppointmentForUser>>, AppError> {
    let list = appointments_for_user(&state.appointments, user_id).await?;
    Ok(Json(list))
}

/// Handler for a counselor changing an appointment's status.
#[axum::debug_handler]
pub async fn update_status_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(appointment_id): Path<i64>,
    ValidJson(payload): ValidJson<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    set_appointment_status(
        &state.appointments,
        &state.counselors,
        &state.users,
        state.notifier(),
        appointment_id,
        payload,
    )
    .await?;

    Ok(Json(json!({
        "message": "Appointment status updated successfully"
    })))
}
