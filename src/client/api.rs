//! HTTP client for the task endpoints.
//!
//! The controller talks to the server exclusively through the [`TasksApi`]
//! capability, so tests can substitute an in-memory implementation and the
//! production client stays a thin JSON-over-HTTP adapter.

use crate::libs::task::{Task, TaskPayload};
use reqwest::{Client, Response};
use thiserror::Error;

/// Error raised by [`TasksApi`] implementations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error body; carries its `error` text.
    #[error("{0}")]
    Api(String),
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// What the controller needs from the task API.
#[allow(async_fn_in_trait)]
pub trait TasksApi {
    async fn list(&self) -> Result<Vec<Task>, ClientError>;
    async fn get(&self, id: i64) -> Result<Task, ClientError>;
    async fn create(&self, payload: &TaskPayload) -> Result<Task, ClientError>;
    async fn update(&self, id: i64, payload: &TaskPayload) -> Result<Task, ClientError>;
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

/// JSON-over-HTTP implementation against a running taskbook server.
pub struct HttpTasksApi {
    client: Client,
    base_url: String,
}

impl HttpTasksApi {
    pub fn new(base_url: &str) -> Self {
        HttpTasksApi {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a non-2xx response into a [`ClientError::Api`] carrying the
    /// server's `error` text, falling back to the status line.
    async fn check(response: Response) -> Result<Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| status.to_string());

        Err(ClientError::Api(detail))
    }
}

impl TasksApi for HttpTasksApi {
    async fn list(&self) -> Result<Vec<Task>, ClientError> {
        let response = Self::check(self.client.get(self.url("/tasks")).send().await?).await?;

        Ok(response.json().await?)
    }

    async fn get(&self, id: i64) -> Result<Task, ClientError> {
        let response = Self::check(self.client.get(self.url(&format!("/tasks/{}", id))).send().await?).await?;

        Ok(response.json().await?)
    }

    async fn create(&self, payload: &TaskPayload) -> Result<Task, ClientError> {
        let response = Self::check(self.client.post(self.url("/tasks")).json(payload).send().await?).await?;

        Ok(response.json().await?)
    }

    async fn update(&self, id: i64, payload: &TaskPayload) -> Result<Task, ClientError> {
        let response = Self::check(self.client.put(self.url(&format!("/tasks/{}", id))).json(payload).send().await?).await?;

        Ok(response.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        Self::check(self.client.delete(self.url(&format!("/tasks/{}", id))).send().await?).await?;

        Ok(())
    }
}
