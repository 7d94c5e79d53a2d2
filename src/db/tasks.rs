//! Task repository: the five CRUD operations over the `tasks` table.
//!
//! Each operation is a single parameterized statement; the write statements
//! use `RETURNING` so the freshly assigned id and timestamps come back from
//! the same round trip. There is no caching — every call hits the database.

use super::db::Db;
use crate::libs::task::Task;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;

const SELECT_TASKS: &str = "SELECT id, title, description, completed, created_at, updated_at \
     FROM tasks ORDER BY created_at DESC, id DESC";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, completed, created_at, updated_at \
     FROM tasks WHERE id = ?";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description) VALUES (?, ?) \
     RETURNING id, title, description, completed, created_at, updated_at";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?, description = ?, completed = ?, updated_at = CURRENT_TIMESTAMP \
     WHERE id = ? RETURNING id, title, description, completed, created_at, updated_at";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?";

/// Data access for tasks. Holds nothing but the pool handle taken from the
/// gateway at construction.
#[derive(Debug, Clone)]
pub struct Tasks {
    pool: SqlitePool,
}

impl Tasks {
    pub fn new(db: &Db) -> Tasks {
        Tasks { pool: db.pool().clone() }
    }

    /// All tasks, newest first. Returns an empty vector when the table has
    /// no rows.
    pub async fn fetch(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(SELECT_TASKS).fetch_all(&self.pool).await?;

        Ok(tasks)
    }

    /// The matching task, or `None` when the id does not resolve to a row.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(SELECT_TASK_BY_ID).bind(id).fetch_optional(&self.pool).await?;

        Ok(task)
    }

    /// Inserts a new task with `completed` defaulted to false and returns
    /// the created row, id and timestamps included.
    pub async fn insert(&self, title: &str, description: Option<&str>) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(INSERT_TASK)
            .bind(title)
            .bind(description)
            .fetch_one(&self.pool)
            .await?;

        Ok(task)
    }

    /// Overwrites title, description and completed unconditionally and
    /// refreshes `updated_at`. Yields `None` when no row matches the id, so
    /// a missing task is an explicit signal rather than an empty re-read.
    pub async fn update(&self, id: i64, title: &str, description: Option<&str>, completed: bool) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(UPDATE_TASK)
            .bind(title)
            .bind(description)
            .bind(completed)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }

    /// Removes the row. True iff a row was actually deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(DELETE_TASK).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
