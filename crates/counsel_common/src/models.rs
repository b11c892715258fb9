//! Shared domain models.
//!
//! These entities are shared between the persistence layer and the feature
//! crates; the db crate re-exports them next to its repositories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A counselor profile as listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counselor {
    pub id: i64,
    pub name: String,
    pub credentials: Option<String>,
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub email: String,
}

/// A registered client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Lifecycle status of an appointment.
///
/// The wire representation is the lowercase name, matching what clients send
/// in `PUT /api/appointments/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Rejected,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Rejected => "rejected",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses reachable from `self`.
    ///
    /// Rejected, completed and cancelled are terminal. Setting the current
    /// status again is treated as an idempotent no-op by the lifecycle logic,
    /// so it is not part of this table.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "rejected" => Ok(AppointmentStatus::Rejected),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(format!("invalid appointment status: {other}")),
        }
    }
}

/// The aggregate root tying a user, a counselor and an optional meeting link together.
///
/// `appointment_datetime` is carried as the string the client submitted
/// (RFC 3339 or `YYYY-MM-DDTHH:MM`); the persistence layer stores it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub counselor_id: i64,
    pub user_id: i64,
    pub appointment_datetime: String,
    pub message: Option<String>,
    pub status: AppointmentStatus,
    pub meeting_link: Option<String>,
}

/// Appointment row joined with the requesting user's display name,
/// as shown on the counselor dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentForCounselor {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub user_name: String,
}

/// Appointment row joined with the counselor's display name,
/// as shown in the client's appointment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentForUser {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub counselor_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for s in ["pending", "confirmed", "rejected", "completed", "cancelled"] {
            let status: AppointmentStatus = s.parse().unwrap();
            assert_eq!(status.as_str(), s);
        }
        assert!("archived".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn transition_table_shape() {
        use AppointmentStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Confirmed.can_transition_to(Rejected));
        for terminal in [Rejected, Completed, Cancelled] {
            for next in [Pending, Confirmed, Rejected, Completed, Cancelled] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }
}
