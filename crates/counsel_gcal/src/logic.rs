//! Google Meet event creation

use crate::auth::HubType;
use chrono::{DateTime, Utc};
use google_calendar3::api::{
    ConferenceData, ConferenceSolutionKey, CreateConferenceRequest, Event, EventDateTime,
};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

// --- Error Handling ---
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcalError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Invalid meeting window: {0}")]
    InvalidWindow(String),
    #[error("Event was created without a Meet link")]
    MissingMeetLink,
}

// --- Data Structures ---

/// Payload for scheduling a Meet call for an appointment.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRequest {
    pub appointment_id: i64,
    /// RFC 3339 start of the call
    pub start_time: String,
    /// RFC 3339 end of the call
    pub end_time: String,
}

/// A created Meet event.
#[derive(Debug, Clone)]
pub struct MeetingDetails {
    pub event_id: Option<String>,
    pub meeting_link: String,
}

/// Parse and validate the meeting window from the request strings.
pub fn parse_meeting_window(
    start_time: &str,
    end_time: &str,
) -> Result<(DateTime<Utc>, DateTime<Utc>), GcalError> {
    let start = DateTime::parse_from_rfc3339(start_time)
        .map_err(|e| GcalError::TimeParseError(format!("Invalid startTime: {e}")))?
        .with_timezone(&Utc);
    let end = DateTime::parse_from_rfc3339(end_time)
        .map_err(|e| GcalError::TimeParseError(format!("Invalid endTime: {e}")))?
        .with_timezone(&Utc);

    if end <= start {
        return Err(GcalError::InvalidWindow(
            "endTime must be after startTime".to_string(),
        ));
    }

    Ok((start, end))
}

/// Create a calendar event carrying a Google Meet conference and return its link.
///
/// The conference request id must be unique per created conference, so a
/// fresh UUID goes out with every call.
pub async fn create_meet_event(
    hub: &HubType,
    calendar_id: &str,
    time_zone: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<MeetingDetails, GcalError> {
    let new_event = Event {
        summary: Some("Counseling Session".to_string()),
        description: Some("Video call for counseling session".to_string()),
        start: Some(EventDateTime {
            date_time: Some(start),
            time_zone: Some(time_zone.to_string()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(end),
            time_zone: Some(time_zone.to_string()),
            ..Default::default()
        }),
        conference_data: Some(ConferenceData {
            create_request: Some(CreateConferenceRequest {
                request_id: Some(Uuid::new_v4().to_string()),
                conference_solution_key: Some(ConferenceSolutionKey {
                    type_: Some("hangoutsMeet".to_string()),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    debug!("Creating Meet event on calendar {}", calendar_id);

    let (_response, created_event) = hub
        .events()
        .insert(new_event, calendar_id)
        .conference_data_version(1)
        .doit()
        .await?;

    let meeting_link = created_event
        .hangout_link
        .clone()
        .or_else(|| video_entry_point(&created_event))
        .ok_or(GcalError::MissingMeetLink)?;

    info!(
        event_id = created_event.id.as_deref().unwrap_or("<none>"),
        "Created Meet event"
    );

    Ok(MeetingDetails {
        event_id: created_event.id,
        meeting_link,
    })
}

/// Older API responses omit `hangoutLink`; fall back to the conference
/// entry point of type "video".
fn video_entry_point(event: &Event) -> Option<String> {
    event
        .conference_data
        .as_ref()?
        .entry_points
        .as_ref()?
        .iter()
        .find(|ep| ep.entry_point_type.as_deref() == Some("video"))?
        .uri
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_window_requires_rfc3339() {
        assert!(parse_meeting_window("2025-06-01T10:00:00Z", "2025-06-01T11:00:00Z").is_ok());
        assert!(matches!(
            parse_meeting_window("2025-06-01 10:00", "2025-06-01T11:00:00Z"),
            Err(GcalError::TimeParseError(_))
        ));
    }

    #[test]
    fn meeting_window_must_move_forward() {
        assert!(matches!(
            parse_meeting_window("2025-06-01T11:00:00Z", "2025-06-01T10:00:00Z"),
            Err(GcalError::InvalidWindow(_))
        ));
        assert!(matches!(
            parse_meeting_window("2025-06-01T10:00:00Z", "2025-06-01T10:00:00Z"),
            Err(GcalError::InvalidWindow(_))
        ));
    }

    #[test]
    fn video_entry_point_is_used_when_hangout_link_missing() {
        use google_calendar3::api::EntryPoint;

        let event = Event {
            conference_data: Some(ConferenceData {
                entry_points: Some(vec![
                    EntryPoint {
                        entry_point_type: Some("phone".to_string()),
                        uri: Some("tel:+1-555-0100".to_string()),
                        ..Default::default()
                    },
                    EntryPoint {
                        entry_point_type: Some("video".to_string()),
                        uri: Some("https://meet.google.com/abc-defg-hij".to_string()),
                        ..Default::default()
                    },
                ]),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            video_entry_point(&event).as_deref(),
            Some("https://meet.google.com/abc-defg-hij")
        );
        assert_eq!(video_entry_point(&Event::default()), None);
    }
}
