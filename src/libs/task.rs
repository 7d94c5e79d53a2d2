use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tracked task as stored in the `tasks` table.
///
/// `id` and both timestamps are assigned by storage; `id` is never reused
/// after deletion and `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for task creation and update.
///
/// Every field is optional at the serde layer so that a missing `title`
/// reaches the router's own validation (a 400 with a field-specific message)
/// instead of being rejected by the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPayload {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        TaskPayload {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
            completed: None,
        }
    }

    /// The title when present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }
}
