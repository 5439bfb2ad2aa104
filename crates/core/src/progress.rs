//! Aggregate progress statistics for a user's task list.

use chrono::NaiveDate;
use serde::Serialize;

/// Dashboard statistics derived from task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    /// Completion percentage, floored. 0 when there are no tasks.
    pub percent: i64,
}

impl ProgressStats {
    /// Compute stats from a total and completed count.
    ///
    /// `percent` is `floor(completed / total * 100)`, and 0 for an empty task
    /// list rather than a division by zero.
    pub fn compute(total: i64, completed: i64) -> Self {
        let percent = if total > 0 { completed * 100 / total } else { 0 };
        Self {
            total,
            completed,
            pending: total - completed,
            percent,
        }
    }
}

/// Whether a task counts as overdue on the given day.
///
/// Derived, never stored: a task is overdue when it has a due date strictly
/// in the past and has not been completed.
pub fn is_overdue(due_date: Option<NaiveDate>, completed: bool, today: NaiveDate) -> bool {
    match due_date {
        Some(due) => !completed && due < today,
        None => false,
    }
}
