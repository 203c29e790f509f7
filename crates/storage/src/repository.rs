//! SQLite Repository

use crate::store::AlertStore;
use crate::StorageError;
use alert_model::Alert;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

const CREATE_ALERTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS alerts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp   TEXT    NOT NULL,
    site_id     TEXT    NOT NULL,
    alert_type  TEXT    NOT NULL,
    severity    TEXT    NOT NULL,
    latitude    REAL    NOT NULL,
    longitude   REAL    NOT NULL
)";

/// SQLite-backed alert repository
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Open (or create) the database at `database_url`.
    ///
    /// Accepts a plain `.db` file path or a `sqlite:` URL, including
    /// `sqlite::memory:` for tests.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            // In-memory SQLite gives each connection its own database, so
            // the pool must stay at a single connection to be coherent.
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!(database_url, "connected to alert database");
        Ok(Self { pool })
    }

    /// Create the alerts table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_ALERTS_TABLE).execute(&self.pool).await?;
        debug!("alert schema initialized");
        Ok(())
    }

    /// Number of persisted alerts
    pub async fn alert_count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM alerts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl AlertStore for SqliteRepository {
    async fn insert_alert(&self, alert: &Alert) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO alerts (timestamp, site_id, alert_type, severity, latitude, longitude) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(alert.timestamp())
        .bind(alert.site_id())
        .bind(alert.alert_type().as_str())
        .bind(alert.severity().as_str())
        .bind(alert.latitude())
        .bind(alert.longitude())
        .execute(&self.pool)
        .await?;

        debug!(site_id = alert.site_id(), "alert row inserted");
        Ok(())
    }
}
