//! SQL implementation of the counselor repository

use crate::error::DbError;
use crate::repositories::counselors::{Counselor, CounselorRepository};
use crate::DbClient;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error};

/// SQL implementation of the counselor repository
#[derive(Debug, Clone)]
pub struct SqlCounselorRepository {
    db_client: DbClient,
}

impl SqlCounselorRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn counselor_from_row(row: &AnyRow) -> Result<Counselor, DbError> {
    Ok(Counselor {
        id: row
            .try_get("id")
            .map_err(|e| DbError::DecodeError(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| DbError::DecodeError(e.to_string()))?,
        credentials: row.try_get("credentials").unwrap_or_default(),
        institution: row.try_get("institution").unwrap_or_default(),
        degree: row.try_get("degree").unwrap_or_default(),
        photo_url: row.try_get("photo_url").unwrap_or_default(),
        bio: row.try_get("bio").unwrap_or_default(),
        email: row
            .try_get("email")
            .map_err(|e| DbError::DecodeError(e.to_string()))?,
    })
}

impl CounselorRepository for SqlCounselorRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing counselors schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS counselors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                credentials TEXT,
                institution TEXT,
                degree TEXT,
                photo_url TEXT,
                bio TEXT,
                email TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Counselor>, DbError> {
        debug!("Listing counselors");

        let query = r#"
            SELECT id, name, credentials, institution, degree, photo_url, bio, email
            FROM counselors
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list counselors: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(counselor_from_row).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Counselor>, DbError> {
        debug!("Finding counselor: {}", id);

        let query = r#"
            SELECT id, name, credentials, institution, degree, photo_url, bio, email
            FROM counselors
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find counselor {}: {}", id, e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(counselor_from_row).transpose()
    }

    async fn update_bio(&self, id: i64, bio: &str) -> Result<bool, DbError> {
        debug!("Updating bio for counselor: {}", id);

        let result = sqlx::query("UPDATE counselors SET bio = ? WHERE id = ?")
            .bind(bio)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update counselor bio: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
