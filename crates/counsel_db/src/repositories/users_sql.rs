//! SQL implementation of the user repository

use crate::error::DbError;
use crate::repositories::users::{User, UserRepository};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error};

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db_client: DbClient,
}

impl SqlUserRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl UserRepository for SqlUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing users schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        debug!("Finding user: {}", id);

        let row = sqlx::query("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user {}: {}", id, e);
                DbError::QueryError(e.to_string())
            })?;

        row.map(|row| {
            Ok(User {
                id: row
                    .try_get("id")
                    .map_err(|e| DbError::DecodeError(e.to_string()))?,
                name: row
                    .try_get("name")
                    .map_err(|e| DbError::DecodeError(e.to_string()))?,
                email: row
                    .try_get("email")
                    .map_err(|e| DbError::DecodeError(e.to_string()))?,
            })
        })
        .transpose()
    }
}
