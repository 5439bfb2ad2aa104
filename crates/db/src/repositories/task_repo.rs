//! Repository for the `tasks` table.
//!
//! Every read and write is scoped to the owning user: each method takes the
//! owner id alongside the task id and folds both into the `WHERE` clause.
//! A lookup for a task that exists but belongs to someone else is
//! indistinguishable from a lookup for a task that does not exist.

use chrono::NaiveDate;
use sqlx::PgPool;
use taskpulse_core::filter::TaskFilter;
use taskpulse_core::types::DbId;

use crate::models::task::{CreateTask, DueTask, Task, TaskCounts, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, priority, completed, due_date, created_at";

/// Provides owner-scoped CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task for the given owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (user_id, title, priority, due_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(input.priority)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// List an owner's tasks under the given status filter, newest first.
    ///
    /// `today` is the reference date for the overdue predicate
    /// (`due_date < today AND NOT completed`).
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
        filter: TaskFilter,
        today: NaiveDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        match filter {
            TaskFilter::All => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks
                     WHERE user_id = $1
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(owner_id)
                    .fetch_all(pool)
                    .await
            }
            TaskFilter::Completed | TaskFilter::Pending => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks
                     WHERE user_id = $1 AND completed = $2
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(owner_id)
                    .bind(filter == TaskFilter::Completed)
                    .fetch_all(pool)
                    .await
            }
            TaskFilter::Overdue => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks
                     WHERE user_id = $1 AND completed = false AND due_date < $2
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(owner_id)
                    .bind(today)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Total and completed counts for one owner, in a single aggregate query.
    pub async fn counts_by_owner(pool: &PgPool, owner_id: DbId) -> Result<TaskCounts, sqlx::Error> {
        sqlx::query_as::<_, TaskCounts>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE completed) AS completed
             FROM tasks
             WHERE user_id = $1",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await
    }

    /// Find one task by id and owner together.
    pub async fn find_by_id_and_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a task's editable fields (title, priority, due date).
    ///
    /// Returns `None` if no task with this id belongs to the owner.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET title = $3, priority = $4, due_date = $5
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(input.priority)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Mark a task completed. There is no un-complete path.
    ///
    /// Returns `true` if a task with this id belongs to the owner. Completing
    /// an already-completed task succeeds and is a no-op.
    pub async fn complete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE tasks SET completed = true WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Tasks due exactly on `date` and not completed, across all owners,
    /// joined with each owner's email address. Used by the reminder pass.
    pub async fn list_due_on(pool: &PgPool, date: NaiveDate) -> Result<Vec<DueTask>, sqlx::Error> {
        sqlx::query_as::<_, DueTask>(
            "SELECT t.id, t.title, u.email AS owner_email
             FROM tasks t
             JOIN users u ON u.id = t.user_id
             WHERE t.due_date = $1 AND t.completed = false
             ORDER BY t.id",
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }
}
