//! Rendered email bodies for the appointment lifecycle

use counsel_common::models::AppointmentStatus;

/// A rendered email: subject plus plain-text and HTML bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Email to the counselor when a new appointment is requested.
pub fn counselor_request(user_name: &str, appointment_datetime: &str, message: &str) -> EmailTemplate {
    EmailTemplate {
        subject: "New Appointment Request".to_string(),
        text: format!(
            "You have a new appointment request from {user_name} on {appointment_datetime}.  Message: {message}"
        ),
        html: format!(
            "<p>You have a new appointment request from {user_name} on {appointment_datetime}.</p>\n<p>Message: {message}</p>"
        ),
    }
}

/// Acknowledgement to the user when their appointment request is stored.
pub fn user_request_received() -> EmailTemplate {
    let body =
        "Your appointment request has been received. You will be notified once the counselor confirms.";
    EmailTemplate {
        subject: "Appointment Request Received".to_string(),
        text: body.to_string(),
        html: format!("<p>{body}</p>"),
    }
}

/// Email to the user when the counselor moves their appointment to a new
/// status. Pending produces no mail; it is the state requests start in.
pub fn status_update(
    counselor_name: &str,
    appointment_datetime: &str,
    status: AppointmentStatus,
) -> Option<EmailTemplate> {
    let subject = match status {
        AppointmentStatus::Pending => return None,
        AppointmentStatus::Confirmed => "Appointment Confirmed",
        AppointmentStatus::Rejected => "Appointment Rejected",
        AppointmentStatus::Completed => "Appointment Completed",
        AppointmentStatus::Cancelled => "Appointment Cancelled",
    };

    let body = format!(
        "Your appointment with {counselor_name} on {appointment_datetime} has been {status}."
    );

    Some(EmailTemplate {
        subject: subject.to_string(),
        text: body.clone(),
        html: format!("<p>{body}</p>"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counselor_request_includes_requester_and_message() {
        let tpl = counselor_request("Casey Lee", "2025-06-01T10:00", "First session");
        assert_eq!(tpl.subject, "New Appointment Request");
        assert!(tpl.text.contains("Casey Lee"));
        assert!(tpl.text.contains("2025-06-01T10:00"));
        assert!(tpl.html.contains("<p>Message: First session</p>"));
    }

    #[test]
    fn status_update_covers_every_non_pending_status() {
        for (status, subject) in [
            (AppointmentStatus::Confirmed, "Appointment Confirmed"),
            (AppointmentStatus::Rejected, "Appointment Rejected"),
            (AppointmentStatus::Completed, "Appointment Completed"),
            (AppointmentStatus::Cancelled, "Appointment Cancelled"),
        ] {
            let tpl = status_update("Dr. Alice Hart", "2025-06-01T10:00", status).unwrap();
            assert_eq!(tpl.subject, subject);
            assert!(tpl.text.contains(status.as_str()));
            assert!(tpl.text.contains("Dr. Alice Hart"));
        }

        assert!(status_update("Dr. Alice Hart", "2025-06-01T10:00", AppointmentStatus::Pending)
            .is_none());
    }
}
