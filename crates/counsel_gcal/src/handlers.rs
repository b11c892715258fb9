//! Axum handlers for meeting scheduling

use crate::auth::HubType;
use crate::logic::{create_meet_event, parse_meeting_window, CreateMeetingRequest, GcalError};
use axum::{extract::State, response::Json};
use counsel_common::error::{
    config_error, database_error, external_service_error, not_found, validation_error, AppError,
};
use counsel_common::ValidJson;
use counsel_config::AppConfig;
use counsel_db::{AppointmentRepository, SqlAppointmentRepository};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

// Define shared state needed by GCal handlers
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    pub calendar_hub: Arc<HubType>, // Share the authenticated Calendar client
    pub appointments: SqlAppointmentRepository,
}

/// Handler to schedule a Google Meet call for an appointment.
///
/// Creates the calendar event first and then persists the Meet link on the
/// appointment row; a missing appointment yields 404 after the event exists.
#[axum::debug_handler]
pub async fn create_meeting_handler(
    State(state): State<Arc<GcalState>>,
    ValidJson(payload): ValidJson<CreateMeetingRequest>,
) -> Result<Json<Value>, AppError> {
    if payload.appointment_id <= 0 {
        return Err(validation_error("appointmentId is required"));
    }

    let (start, end) = parse_meeting_window(&payload.start_time, &payload.end_time)
        .map_err(validation_error)?;

    let gcal_config = state
        .config
        .gcal
        .as_ref()
        .ok_or_else(|| config_error("GCal config missing"))?;
    let calendar_id = gcal_config
        .calendar_id
        .as_deref()
        .ok_or_else(|| config_error("GCal calendar ID missing"))?;
    // Validate the configured zone against the IANA database before handing
    // it to the API.
    let time_zone = gcal_config.time_zone.as_deref().unwrap_or("UTC");
    let time_zone: chrono_tz::Tz = time_zone
        .parse()
        .map_err(|_| config_error(format!("Invalid gcal time_zone: {time_zone}")))?;

    let details = create_meet_event(&state.calendar_hub, calendar_id, time_zone.name(), start, end)
        .await
        .map_err(|e| match e {
            GcalError::TimeParseError(_) | GcalError::InvalidWindow(_) => validation_error(e),
            other => external_service_error("google_calendar", other),
        })?;

    let updated = state
        .appointments
        .set_meeting_link(payload.appointment_id, &details.meeting_link)
        .await
        .map_err(database_error)?;

    if !updated {
        return Err(not_found("Appointment not found"));
    }

    info!(
        "Attached Meet link to appointment {}",
        payload.appointment_id
    );

    Ok(Json(json!({ "meetingLink": details.meeting_link })))
}
