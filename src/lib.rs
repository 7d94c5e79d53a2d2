//! # Taskbook - Task Tracking Web Application
//!
//! A small web application for tracking tasks: a REST API over a single
//! SQLite-backed `tasks` table, plus a toolkit-agnostic client view-model
//! that renders the list as markup.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, edit, complete and delete tasks
//! - **REST API**: Five JSON endpoints plus a database-independent health check
//! - **Pooled Storage**: Bounded SQLite connection pool with one-time schema bootstrap
//! - **Headless Client**: View-model with HTML rendering, escaping and action bindings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskbook::db::db::Db;
//! use taskbook::libs::config::Config;
//! use taskbook::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Db::init(&config.database).await?;
//!     server::serve(&config.server, db).await
//! }
//! ```

pub mod client;
pub mod db;
pub mod libs;
pub mod server;
