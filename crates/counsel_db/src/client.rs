//! Database client for Counsel
//!
//! This module provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library. MySQL is the production backend;
//! the SQLite feature exists for local development and tests.

use crate::error::DbError;
use counsel_config::{AppConfig, DatabaseConfig};
use sqlx::pool::PoolOptions;
use sqlx::Pool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Database client for Counsel
///
/// One query per request; the pool is safe for concurrent independent use and
/// is the only shared state crossing requests.
#[derive(Debug, Clone)]
pub struct DbClient {
    /// The database connection pool
    pool: Pool<sqlx::Any>,
}

impl DbClient {
    /// Create a new database client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the database configuration is missing, the URL is
    /// empty, or the connection fails.
    pub async fn new(config: &Arc<AppConfig>) -> Result<Self, DbError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("Database configuration is missing".to_string()))?;

        Self::from_config(db_config).await
    }

    /// Create a new database client from a database configuration.
    pub async fn from_config(db_config: &DatabaseConfig) -> Result<Self, DbError> {
        let db_url = &db_config.url;
        if db_url.is_empty() {
            return Err(DbError::ConfigError("Database URL is empty".to_string()));
        }

        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool })
    }

    /// Create a new database client from a database URL.
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.is_empty() {
            return Err(DbError::UrlError("Database URL is empty".to_string()));
        }

        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool })
    }

    async fn create_pool(db_url: &str) -> Result<Pool<sqlx::Any>, DbError> {
        debug!("Creating database pool");

        // Register whichever drivers this build was compiled with, so the
        // "any" connector can dispatch on the URL scheme.
        sqlx::any::install_default_drivers();

        let pool_options = PoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Duration::from_secs(600));

        let pool = pool_options
            .connect_with(
                sqlx::any::AnyConnectOptions::from_str(db_url)
                    .map_err(|e| DbError::UrlError(e.to_string()))?,
            )
            .await
            .map_err(|e| {
                error!("Failed to create database pool: {}", e);
                DbError::PoolError(e.to_string())
            })?;

        info!("Database pool created successfully");
        Ok(pool)
    }

    /// Get the database connection pool
    pub fn pool(&self) -> &Pool<sqlx::Any> {
        &self.pool
    }

    /// Execute a query that returns no rows, yielding the number of rows affected.
    pub async fn execute(&self, query: &str) -> Result<u64, DbError> {
        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    /// Check if the database is healthy by executing a trivial query.
    pub async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

impl std::fmt::Display for DbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbClient")
    }
}
