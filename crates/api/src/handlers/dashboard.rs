//! Handlers for the dashboard: task creation plus the filtered list and
//! aggregate progress statistics, composed into one view model.

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use taskpulse_core::error::CoreError;
use taskpulse_core::filter::TaskFilter;
use taskpulse_core::progress::ProgressStats;
use taskpulse_db::models::task::{CreateTask, Task, TaskPriority};
use taskpulse_db::repositories::TaskRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query params for `GET /dashboard`.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Status filter selector; anything unrecognized behaves as `all`.
    pub filter: Option<String>,
}

/// Request body for `POST /dashboard`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// The dashboard view model: the filtered task collection plus aggregate
/// statistics and the active filter selector.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub tasks: Vec<Task>,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub pending_tasks: i64,
    /// Completion percentage, floored; 0 when the user has no tasks.
    pub progress_percent: i64,
    pub filter: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
///
/// The application root just forwards to the dashboard.
pub async fn root(_auth: AuthUser) -> Redirect {
    Redirect::to("/dashboard")
}

/// GET /dashboard
///
/// The filtered task list for the requesting user, with stats computed over
/// ALL of the user's tasks regardless of the active filter.
pub async fn show(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> AppResult<Json<DashboardView>> {
    let filter = TaskFilter::parse(params.filter.as_deref());
    let today = Local::now().date_naive();

    let tasks = TaskRepo::list_by_owner(&state.pool, auth.user_id, filter, today).await?;
    let counts = TaskRepo::counts_by_owner(&state.pool, auth.user_id).await?;
    let stats = ProgressStats::compute(counts.total, counts.completed);

    Ok(Json(DashboardView {
        tasks,
        total_tasks: stats.total,
        completed_tasks: stats.completed,
        pending_tasks: stats.pending,
        progress_percent: stats.percent,
        filter: filter.as_str(),
    }))
}

/// POST /dashboard
///
/// Create a task owned by the requesting user, then redirect back to the
/// idempotent dashboard view.
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<Redirect> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let task = TaskRepo::create(
        &state.pool,
        auth.user_id,
        &CreateTask {
            title: input.title,
            priority: input.priority,
            due_date: input.due_date,
        },
    )
    .await?;

    tracing::debug!(task_id = task.id, user_id = auth.user_id, "Task created");
    Ok(Redirect::to("/dashboard"))
}
