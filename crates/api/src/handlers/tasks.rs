//! Single-task mutation handlers: edit, complete, delete.
//!
//! Every operation resolves the target by id AND owner identity together; a
//! task that exists but belongs to someone else yields the same not-found
//! response as a task that does not exist at all.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use taskpulse_core::error::CoreError;
use taskpulse_core::types::DbId;
use taskpulse_db::models::task::{Task, TaskPriority, UpdateTask};
use taskpulse_db::repositories::TaskRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /tasks/{id}/edit`.
///
/// All three editable fields are overwritten; omitting `due_date` clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct EditTaskRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

fn task_not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "task", id }
}

/// GET /tasks/{id}/edit
///
/// Fetch one task for the edit view.
pub async fn edit_form(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = TaskRepo::find_by_id_and_owner(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| task_not_found(id))?;

    Ok(Json(DataResponse { data: task }))
}

/// POST /tasks/{id}/edit
///
/// Overwrite title, priority, and due date, then redirect to the dashboard.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EditTaskRequest>,
) -> AppResult<Redirect> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    TaskRepo::update(
        &state.pool,
        id,
        auth.user_id,
        &UpdateTask {
            title: input.title,
            priority: input.priority,
            due_date: input.due_date,
        },
    )
    .await?
    .ok_or_else(|| task_not_found(id))?;

    Ok(Redirect::to("/dashboard"))
}

/// GET|POST /tasks/{id}/complete
///
/// Mark a task completed. Unconditional: there is no un-complete path, and
/// completing an already-completed task is a successful no-op.
pub async fn complete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let updated = TaskRepo::complete(&state.pool, id, auth.user_id).await?;
    if !updated {
        return Err(task_not_found(id).into());
    }

    Ok(Redirect::to("/dashboard"))
}

/// GET|POST /tasks/{id}/delete
///
/// Permanently delete a task.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = TaskRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(task_not_found(id).into());
    }

    tracing::debug!(task_id = id, user_id = auth.user_id, "Task deleted");
    Ok(Redirect::to("/dashboard"))
}
