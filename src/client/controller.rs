//! The client-side controller driving the task list UI.
//!
//! Holds exactly one piece of session state: the id of the task currently
//! being edited, or none. Every network call is wrapped so a failure logs
//! the detail, surfaces alert text to the caller, and leaves both the edit
//! state and the previously rendered list untouched.

use super::api::{ClientError, TasksApi};
use super::view::{TaskAction, TaskView};
use crate::libs::messages::Message;
use crate::libs::task::TaskPayload;
use crate::msg_error;
use crate::msg_error_anyhow;
use anyhow::Result;

/// Markup plus the action bindings belonging to that exact render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub markup: String,
    pub actions: Vec<TaskAction>,
}

/// Form prefill values handed back when an edit begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub description: String,
}

pub struct TaskController<A: TasksApi, V: TaskView> {
    api: A,
    view: V,
    editing_id: Option<i64>,
}

impl<A: TasksApi, V: TaskView> TaskController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        TaskController { api, view, editing_id: None }
    }

    /// The task currently being edited, if any.
    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// Fetches and renders the whole list. A fetch failure degrades to an
    /// inline error paragraph with no action bindings.
    pub async fn load(&self) -> RenderedList {
        match self.api.list().await {
            Ok(tasks) => RenderedList {
                markup: self.view.render(&tasks),
                actions: self.view.actions(&tasks),
            },
            Err(e) => {
                report(Message::TasksLoadFailed, &e);
                RenderedList {
                    markup: format!("<p>{}</p>", Message::TasksLoadFailed),
                    actions: Vec::new(),
                }
            }
        }
    }

    /// Creates or updates depending on whether an edit is in progress. The
    /// edit state is cleared only on success; the error carries the alert
    /// text to show the user.
    pub async fn submit(&mut self, title: &str, description: &str) -> Result<RenderedList> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return Err(msg_error_anyhow!(Message::TitleRequired));
        }

        let mut payload = TaskPayload::new(title, (!description.is_empty()).then_some(description));
        let result = match self.editing_id {
            Some(id) => {
                // The form does not carry the completion flag, so preserve
                // whatever the row currently has.
                match self.api.get(id).await {
                    Ok(current) => {
                        payload.completed = Some(current.completed);
                        self.api.update(id, &payload).await
                    }
                    Err(e) => Err(e),
                }
            }
            None => self.api.create(&payload).await,
        };

        match result {
            Ok(_) => {
                self.editing_id = None;
                Ok(self.load().await)
            }
            Err(e) => {
                report(Message::TaskSaveFailed, &e);
                Err(alert_for(Message::TaskSaveFailed, e))
            }
        }
    }

    /// Loads a task into the form and arms the edit state.
    pub async fn edit(&mut self, id: i64) -> Result<EditForm> {
        match self.api.get(id).await {
            Ok(task) => {
                self.editing_id = Some(id);
                Ok(EditForm {
                    title: task.title,
                    description: task.description.unwrap_or_default(),
                })
            }
            Err(e) => {
                report(Message::TaskLoadFailed, &e);
                Err(msg_error_anyhow!(Message::TaskLoadFailed))
            }
        }
    }

    /// Abandons the edit in progress, if any.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    /// Writes the completion flag, re-reading the row first so the full
    /// overwrite keeps title and description intact.
    pub async fn toggle(&self, id: i64, completed: bool) -> Result<RenderedList> {
        let result = match self.api.get(id).await {
            Ok(task) => {
                let mut payload = TaskPayload::new(&task.title, task.description.as_deref());
                payload.completed = Some(completed);
                self.api.update(id, &payload).await.map(|_| ())
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Ok(self.load().await),
            Err(e) => {
                report(Message::TaskToggleFailed, &e);
                Err(msg_error_anyhow!(Message::TaskToggleFailed))
            }
        }
    }

    /// Deletes the task and re-renders.
    pub async fn delete(&self, id: i64) -> Result<RenderedList> {
        match self.api.delete(id).await {
            Ok(()) => Ok(self.load().await),
            Err(e) => {
                report(Message::TaskRemoveFailed, &e);
                Err(msg_error_anyhow!(Message::TaskRemoveFailed))
            }
        }
    }
}

/// Console-logs the failure detail behind a user-visible alert.
fn report(context: Message, err: &ClientError) {
    msg_error!(Message::ClientErrorDetail(context.to_string(), err.to_string()));
}

/// Alert text for a save failure: the server's own error text when it sent
/// one, the generic message otherwise.
fn alert_for(fallback: Message, err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Api(detail) => msg_error_anyhow!(Message::ServerReportedError(detail)),
        ClientError::Transport(_) => msg_error_anyhow!(fallback),
    }
}
