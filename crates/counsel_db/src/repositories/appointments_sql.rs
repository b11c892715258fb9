//! SQL implementation of the appointment repository

use crate::error::DbError;
use crate::repositories::appointments::{
    Appointment, AppointmentForCounselor, AppointmentForUser, AppointmentRepository,
    AppointmentStatus, NewAppointment,
};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error};

/// SQL implementation of the appointment repository
#[derive(Debug, Clone)]
pub struct SqlAppointmentRepository {
    db_client: DbClient,
}

impl SqlAppointmentRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn appointment_from_row(row: &AnyRow) -> Result<Appointment, DbError> {
    let status: String = row
        .try_get("status")
        .map_err(|e| DbError::DecodeError(e.to_string()))?;

    Ok(Appointment {
        id: row
            .try_get("id")
            .map_err(|e| DbError::DecodeError(e.to_string()))?,
        counselor_id: row
            .try_get("counselor_id")
            .map_err(|e| DbError::DecodeError(e.to_string()))?,
        user_id: row
            .try_get("user_id")
            .map_err(|e| DbError::DecodeError(e.to_string()))?,
        appointment_datetime: row
            .try_get("appointment_datetime")
            .map_err(|e| DbError::DecodeError(e.to_string()))?,
        message: row.try_get("message").unwrap_or_default(),
        status: status.parse::<AppointmentStatus>().map_err(DbError::DecodeError)?,
        meeting_link: row.try_get("meeting_link").unwrap_or_default(),
    })
}

impl AppointmentRepository for SqlAppointmentRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing appointments schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS appointments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                counselor_id INTEGER NOT NULL,
                user_id INTEGER NOT NULL,
                appointment_datetime TEXT NOT NULL,
                message TEXT,
                status TEXT NOT NULL DEFAULT 'pending',
                meeting_link TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#;

        self.db_client.execute(query).await?;
        Ok(())
    }

    async fn insert(&self, appointment: &NewAppointment) -> Result<i64, DbError> {
        debug!(
            "Inserting appointment request for counselor {} from user {}",
            appointment.counselor_id, appointment.user_id
        );

        let query = r#"
            INSERT INTO appointments (counselor_id, user_id, appointment_datetime, message, status)
            VALUES (?, ?, ?, ?, 'pending')
        "#;

        let result = sqlx::query(query)
            .bind(appointment.counselor_id)
            .bind(appointment.user_id)
            .bind(appointment.appointment_datetime.as_str())
            .bind(appointment.message.as_deref())
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert appointment: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        result
            .last_insert_id()
            .ok_or_else(|| DbError::QueryError("No insert id returned".to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, DbError> {
        debug!("Finding appointment: {}", id);

        let query = r#"
            SELECT id, counselor_id, user_id, appointment_datetime, message, status, meeting_link
            FROM appointments
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find appointment {}: {}", id, e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(appointment_from_row).transpose()
    }

    async fn list_for_counselor(
        &self,
        counselor_id: i64,
    ) -> Result<Vec<AppointmentForCounselor>, DbError> {
        debug!("Listing appointments for counselor: {}", counselor_id);

        let query = r#"
            SELECT a.id, a.counselor_id, a.user_id, a.appointment_datetime, a.message,
                   a.status, a.meeting_link, u.name AS user_name
            FROM appointments a
            JOIN users u ON u.id = a.user_id
            WHERE a.counselor_id = ?
            ORDER BY a.id DESC
        "#;

        let rows = sqlx::query(query)
            .bind(counselor_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!(
                    "Failed to list appointments for counselor {}: {}",
                    counselor_id, e
                );
                DbError::QueryError(e.to_string())
            })?;

        rows.iter()
            .map(|row| {
                Ok(AppointmentForCounselor {
                    appointment: appointment_from_row(row)?,
                    user_name: row
                        .try_get("user_name")
                        .map_err(|e| DbError::DecodeError(e.to_string()))?,
                })
            })
            .collect()
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<AppointmentForUser>, DbError> {
        debug!("Listing appointments for user: {}", user_id);

        let query = r#"
            SELECT a.id, a.counselor_id, a.user_id, a.appointment_datetime, a.message,
                   a.status, a.meeting_link, c.name AS counselor_name
            FROM appointments a
            JOIN counselors c ON c.id = a.counselor_id
            WHERE a.user_id = ?
            ORDER BY a.id DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list appointments for user {}: {}", user_id, e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter()
            .map(|row| {
                Ok(AppointmentForUser {
                    appointment: appointment_from_row(row)?,
                    counselor_name: row
                        .try_get("counselor_name")
                        .map_err(|e| DbError::DecodeError(e.to_string()))?,
                })
            })
            .collect()
    }

    async fn update_status(&self, id: i64, status: AppointmentStatus) -> Result<bool, DbError> {
        debug!("Updating appointment {} status to {}", id, status);

        let result = sqlx::query("UPDATE appointments SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update appointment status: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_meeting_link(&self, id: i64, meeting_link: &str) -> Result<bool, DbError> {
        debug!("Setting meeting link on appointment: {}", id);

        let result = sqlx::query("UPDATE appointments SET meeting_link = ? WHERE id = ?")
            .bind(meeting_link)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to set meeting link: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
