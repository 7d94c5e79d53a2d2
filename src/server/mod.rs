//! HTTP surface of the taskbook application.
//!
//! Assembles the axum router around an initialized storage gateway and runs
//! it on a TCP listener. Each endpoint is a thin adapter: it validates
//! request input, calls one repository operation, and translates the result
//! into a status code and JSON body. Requests are handled independently; the
//! connection pool inside [`Tasks`] is the only shared resource.

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::config::ServerConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::time::Instant;
use tokio::net::TcpListener;

pub mod health;
pub mod tasks;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Tasks,
    pub started_at: Instant,
}

/// Builds the application router. The gateway moves in here at startup and
/// lives for the life of the process.
pub fn router(db: Db) -> Router {
    let state = AppState {
        tasks: Tasks::new(&db),
        started_at: Instant::now(),
    };

    Router::new()
        .route("/health", get(health::health))
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/tasks/{id}", get(tasks::get_task).put(tasks::update_task).delete(tasks::delete_task))
        .with_state(state)
}

/// Binds the listener and serves requests until the process is stopped.
pub async fn serve(config: &ServerConfig, db: Db) -> Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    msg_print!(Message::ServerListening(listener.local_addr()?.to_string()));

    axum::serve(listener, router(db)).await?;

    Ok(())
}
