//! Markup rendering for the task list.
//!
//! [`TaskView`] is the capability the controller renders through: turn a
//! task list into markup, and enumerate the action bindings for that list.
//! Bindings are recomputed from the list on every render, so stale handlers
//! cannot survive a re-render. [`HtmlTaskView`] is the default HTML
//! implementation; all user-supplied text is escaped before insertion.

use crate::libs::messages::Message;
use crate::libs::task::Task;

/// A user action exposed by the rendered task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Write the given completion flag to the task.
    Toggle { id: i64, completed: bool },
    /// Begin editing the task in the form.
    Edit { id: i64 },
    /// Remove the task.
    Delete { id: i64 },
}

/// Capability to present a task list, independent of any UI toolkit.
pub trait TaskView {
    /// Markup for the full list; replaces the previous render entirely.
    fn render(&self, tasks: &[Task]) -> String;

    /// Action bindings for the list as rendered, one toggle/edit/delete
    /// triple per task.
    fn actions(&self, tasks: &[Task]) -> Vec<TaskAction>;
}

/// Default HTML renderer.
pub struct HtmlTaskView;

impl TaskView for HtmlTaskView {
    fn render(&self, tasks: &[Task]) -> String {
        if tasks.is_empty() {
            return format!("<p>{}</p>", Message::NoTasksYet);
        }

        tasks.iter().map(render_task).collect::<Vec<_>>().join("\n")
    }

    fn actions(&self, tasks: &[Task]) -> Vec<TaskAction> {
        tasks
            .iter()
            .flat_map(|task| {
                [
                    TaskAction::Toggle {
                        id: task.id,
                        completed: !task.completed,
                    },
                    TaskAction::Edit { id: task.id },
                    TaskAction::Delete { id: task.id },
                ]
            })
            .collect()
    }
}

fn render_task(task: &Task) -> String {
    let item_class = if task.completed { "task-item completed" } else { "task-item" };
    let badge_class = if task.completed { "status-completed" } else { "status-pending" };
    let badge_text = if task.completed { "Completed" } else { "Pending" };
    let toggle_text = if task.completed { "Mark Incomplete" } else { "Mark Complete" };

    let description = match &task.description {
        Some(description) => format!("<div class=\"task-description\">{}</div>", escape_html(description)),
        None => String::new(),
    };
    let updated = if task.updated_at != task.created_at {
        format!("<br>Updated: {}", task.updated_at.format("%Y-%m-%d %H:%M"))
    } else {
        String::new()
    };

    format!(
        "<div class=\"{item_class}\">\
         <div class=\"task-title\">{title}<span class=\"status-badge {badge_class}\">{badge_text}</span></div>\
         {description}\
         <div class=\"task-meta\">Created: {created}{updated}</div>\
         <div class=\"task-actions\">\
         <button data-action=\"toggle\" data-id=\"{id}\" data-completed=\"{toggle_to}\">{toggle_text}</button>\
         <button class=\"edit\" data-action=\"edit\" data-id=\"{id}\">Edit</button>\
         <button class=\"delete\" data-action=\"delete\" data-id=\"{id}\">Delete</button>\
         </div>\
         </div>",
        title = escape_html(&task.title),
        created = task.created_at.format("%Y-%m-%d %H:%M"),
        id = task.id,
        toggle_to = !task.completed,
    )
}

/// Escapes user-supplied text for safe insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
