//! Storage gateway owning the pooled database connection.
//!
//! [`Db::init`] is called exactly once at process start: it builds a bounded
//! connection pool over the SQLite database file, proves connectivity with a
//! single acquire/release round trip, and bootstraps the `tasks` table. The
//! initialized gateway is then handed by value into the router layer; no
//! global handle exists, so there is no "not yet initialized" state to guard
//! against.
//!
//! A connectivity failure here is fatal and aborts startup. There is no
//! retry or backoff logic.

use crate::libs::config::DbConfig;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    completed BOOLEAN NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Connects the pool, verifies connectivity and ensures the `tasks`
    /// table exists. Idempotent and safe to call once at startup.
    pub async fn init(config: &DbConfig) -> Result<Db> {
        match Self::connect(config).await {
            Ok(db) => Ok(db),
            Err(e) => {
                msg_error!(Message::DatabaseConnectionFailed(format!("{e:#}")));
                Err(e)
            }
        }
    }

    async fn connect(config: &DbConfig) -> Result<Db> {
        let options = SqliteConnectOptions::new().filename(&config.path).create_if_missing(true);
        let pool = SqlitePoolOptions::new().max_connections(config.pool_size).connect_with(options).await?;

        // One acquire/release round trip proves the database is reachable
        // before any traffic is served.
        drop(pool.acquire().await?);
        msg_success!(Message::DatabaseConnected);

        sqlx::query(SCHEMA_TASKS).execute(&pool).await?;
        msg_success!(Message::TasksTableInitialized);

        Ok(Db { pool })
    }

    /// The initialized pool handle, shared with the repository layer.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
