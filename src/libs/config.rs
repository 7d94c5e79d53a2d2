//! Runtime configuration for the taskbook application.
//!
//! All settings are supplied through the environment (a `.env` file is
//! honored when present) and collected into a typed [`Config`] before any
//! component starts. Missing variables fall back to defaults; malformed
//! numeric values are configuration errors and abort startup.
//!
//! ## Variables
//!
//! | Variable                 | Default        | Meaning                          |
//! |--------------------------|----------------|----------------------------------|
//! | `TASKBOOK_HOST`          | `127.0.0.1`    | HTTP server bind address         |
//! | `TASKBOOK_PORT`          | `3000`         | HTTP server port                 |
//! | `TASKBOOK_DB_PATH`       | `taskbook.db`  | SQLite database file             |
//! | `TASKBOOK_DB_POOL_SIZE`  | `10`           | Connection pool capacity         |

use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "taskbook.db";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` pair in the form `TcpListener::bind` expects.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Storage gateway settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Path of the SQLite database file; created on first start.
    pub path: PathBuf,
    /// Fixed capacity of the connection pool. Acquisition beyond the
    /// capacity queues without bound.
    pub pool_size: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            path: PathBuf::from(DEFAULT_DB_PATH),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

/// Root configuration assembled from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DbConfig,
}

impl Config {
    /// Reads the configuration from the environment, applying defaults for
    /// anything unset.
    pub fn from_env() -> Result<Config> {
        let mut config = Config::default();

        if let Ok(host) = env::var("TASKBOOK_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("TASKBOOK_PORT") {
            config.server.port = match port.parse() {
                Ok(port) => port,
                Err(_) => msg_bail_anyhow!(Message::ConfigInvalidValue("TASKBOOK_PORT".to_string(), port)),
            };
        }
        if let Ok(path) = env::var("TASKBOOK_DB_PATH") {
            config.database.path = PathBuf::from(path);
        }
        if let Ok(pool_size) = env::var("TASKBOOK_DB_POOL_SIZE") {
            config.database.pool_size = match pool_size.parse() {
                Ok(size) => size,
                Err(_) => msg_bail_anyhow!(Message::ConfigInvalidValue("TASKBOOK_DB_POOL_SIZE".to_string(), pool_size)),
            };
        }

        Ok(config)
    }
}
