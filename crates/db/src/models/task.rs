//! Task entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskpulse_core::types::{DbId, Timestamp};

/// Task priority, mapped to the `task_priority` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_priority")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    /// The owner. Set at creation, never changed.
    pub user_id: DbId,
    pub title: String,
    pub priority: TaskPriority,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for creating a new task. The owner comes from the caller's identity,
/// never from client input.
#[derive(Debug)]
pub struct CreateTask {
    pub title: String,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

/// DTO for editing a task. All three editable fields are overwritten, so a
/// `None` due date clears any previously set one.
#[derive(Debug)]
pub struct UpdateTask {
    pub title: String,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

/// Aggregate counts for one owner's tasks, fetched in a single query.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TaskCounts {
    pub total: i64,
    pub completed: i64,
}

/// A task due for a reminder, joined with its owner's email address.
#[derive(Debug, Clone, FromRow)]
pub struct DueTask {
    pub id: DbId,
    pub title: String,
    pub owner_email: String,
}
