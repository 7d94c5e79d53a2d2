//! Display implementation for taskbook application messages.
//!
//! Single source of truth for all user-facing text: startup console lines,
//! HTTP error bodies, and the client controller's alert messages. Keeping
//! the text here means the router and the client stay byte-for-byte
//! consistent about what the user sees.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Startup messages
            Message::DatabaseConnected => "Database connected successfully".to_string(),
            Message::TasksTableInitialized => "Tasks table initialized".to_string(),
            Message::DatabaseConnectionFailed(detail) => format!("Database connection failed: {}", detail),
            Message::ServerListening(addr) => format!("🚀 Taskbook server running on http://{}", addr),
            Message::UsingDatabase(path) => format!("Using database at {}", path),

            // Task API messages
            Message::TitleRequired => "Title is required".to_string(),
            Message::TaskNotFound => "Task not found".to_string(),
            Message::TasksFetchFailed => "Failed to fetch tasks".to_string(),
            Message::TaskFetchFailed => "Failed to fetch task".to_string(),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskUpdateFailed => "Failed to update task".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task".to_string(),
            Message::StorageError(detail) => format!("Storage error: {}", detail),

            // Client messages
            Message::NoTasksYet => "No tasks yet. Create your first task!".to_string(),
            Message::TasksLoadFailed => "Error loading tasks".to_string(),
            Message::TaskLoadFailed => "Error loading task".to_string(),
            Message::TaskSaveFailed => "Error saving task".to_string(),
            Message::TaskToggleFailed => "Error updating task".to_string(),
            Message::TaskRemoveFailed => "Error deleting task".to_string(),
            Message::ServerReportedError(detail) => format!("Error: {}", detail),
            Message::ClientErrorDetail(context, detail) => format!("{}: {}", context, detail),

            // Configuration messages
            Message::ConfigInvalidValue(name, value) => format!("Invalid value for {}: {}", name, value),
        };
        write!(f, "{}", text)
    }
}
