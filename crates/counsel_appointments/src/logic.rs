//! Core appointment lifecycle logic
//!
//! Notification delivery is best-effort: failures are logged and never fail
//! the request that triggered them. Requests and status changes therefore
//! commit exactly once regardless of mail trouble.

use crate::error::AppointmentError;
use chrono::{DateTime, NaiveDateTime};
use counsel_common::services::NotificationService;
use counsel_db::{
    Appointment, AppointmentForCounselor, AppointmentForUser, AppointmentRepository,
    AppointmentStatus, CounselorRepository, NewAppointment, UserRepository,
};
use counsel_notify::templates;
use serde::Deserialize;
use tracing::{info, warn};

/// Payload for a new appointment request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub counselor_id: i64,
    pub user_id: i64,
    pub appointment_date_time: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for a status change.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Accepts RFC 3339 or the HTML `datetime-local` shape the booking form
/// submits (`YYYY-MM-DDTHH:MM`, optionally with seconds).
fn validate_datetime(value: &str) -> Result<(), AppointmentError> {
    if DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok()
    {
        Ok(())
    } else {
        Err(AppointmentError::ValidationError(format!(
            "Invalid appointment date/time: {value}"
        )))
    }
}

async fn notify(service: Option<&dyn NotificationService>, to: &str, tpl: &templates::EmailTemplate) {
    match service {
        Some(service) => {
            if !service.send_email(to, &tpl.subject, &tpl.text, &tpl.html).await {
                warn!(to = to, subject = %tpl.subject, "Notification email failed");
            }
        }
        None => {
            info!(to = to, subject = %tpl.subject, "Notifications disabled, skipping email");
        }
    }
}

/// Create a pending appointment and notify both parties.
///
/// Returns the generated appointment id. Emails go out only when both the
/// counselor and the user rows exist; a dangling reference skips mail but
/// still stores the appointment.
pub async fn request_appointment<A, C, U>(
    appointments: &A,
    counselors: &C,
    users: &U,
    notifier: Option<&dyn NotificationService>,
    request: CreateAppointmentRequest,
) -> Result<i64, AppointmentError>
where
    A: AppointmentRepository,
    C: CounselorRepository,
    U: UserRepository,
{
    if request.counselor_id <= 0 || request.user_id <= 0 {
        return Err(AppointmentError::ValidationError(
            "counselorId and userId are required".to_string(),
        ));
    }
    validate_datetime(&request.appointment_date_time)?;

    let appointment_id = appointments
        .insert(&NewAppointment {
            counselor_id: request.counselor_id,
            user_id: request.user_id,
            appointment_datetime: request.appointment_date_time.clone(),
            message: request.message.clone(),
        })
        .await?;

    info!(
        "Created appointment {} for counselor {} from user {}",
        appointment_id, request.counselor_id, request.user_id
    );

    let counselor = counselors.find_by_id(request.counselor_id).await?;
    let user = users.find_by_id(request.user_id).await?;

    match (counselor, user) {
        (Some(counselor), Some(user)) => {
            let message = request.message.as_deref().unwrap_or("");
            let counselor_tpl = templates::counselor_request(
                &user.name,
                &request.appointment_date_time,
                message,
            );
            notify(notifier, &counselor.email, &counselor_tpl).await;

            let user_tpl = templates::user_request_received();
            notify(notifier, &user.email, &user_tpl).await;
        }
        _ => {
            warn!(
                "Skipping notifications for appointment {}: counselor or user missing",
                appointment_id
            );
        }
    }

    Ok(appointment_id)
}

/// Change an appointment's status, enforcing the lifecycle transition table.
///
/// Setting the current status again is an idempotent no-op and sends no
/// notification. Any other transition not in the table is a conflict.
pub async fn set_appointment_status<A, C, U>(
    appointments: &A,
    counselors: &C,
    users: &U,
    notifier: Option<&dyn NotificationService>,
    appointment_id: i64,
    request: UpdateStatusRequest,
) -> Result<Appointment, AppointmentError>
where
    A: AppointmentRepository,
    C: CounselorRepository,
    U: UserRepository,
{
    let next: AppointmentStatus = request
        .status
        .parse()
        .map_err(AppointmentError::ValidationError)?;

    let appointment = appointments
        .find_by_id(appointment_id)
        .await?
        .ok_or_else(|| AppointmentError::NotFoundError("Appointment not found".to_string()))?;

    if appointment.status == next {
        info!(
            "Appointment {} already has status {}, nothing to do",
            appointment_id, next
        );
        return Ok(appointment);
    }

    if !appointment.status.can_transition_to(next) {
        return Err(AppointmentError::InvalidTransition {
            from: appointment.status,
            to: next,
        });
    }

    if !appointments.update_status(appointment_id, next).await? {
        return Err(AppointmentError::NotFoundError(
            "Appointment not found".to_string(),
        ));
    }

    info!(
        "Appointment {} moved from {} to {}",
        appointment_id, appointment.status, next
    );

    let counselor = counselors.find_by_id(appointment.counselor_id).await?;
    let user = users.find_by_id(appointment.user_id).await?;

    if let (Some(counselor), Some(user)) = (counselor, user) {
        if let Some(tpl) =
            templates::status_update(&counselor.name, &appointment.appointment_datetime, next)
        {
            notify(notifier, &user.email, &tpl).await;
        }
    } else {
        warn!(
            "Skipping status notification for appointment {}: counselor or user missing",
            appointment_id
        );
    }

    Ok(Appointment {
        status: next,
        ..appointment
    })
}

/// List a counselor's appointments with requester names.
pub async fn appointments_for_counselor<A>(
    appointments: &A,
    counselor_id: i64,
) -> Result<Vec<AppointmentForCounselor>, AppointmentError>
where
    A: AppointmentRepository,
{
    Ok(appointments.list_for_counselor(counselor_id).await?)
}

/// List a user's appointments with counselor names.
pub async fn appointments_for_user<A>(
    appointments: &A,
    user_id: i64,
) -> Result<Vec<AppointmentForUser>, AppointmentError>
where
    A: AppointmentRepository,
{
    Ok(appointments.list_for_user(user_id).await?)
}
