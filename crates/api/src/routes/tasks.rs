//! Route definitions for single-task operations.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task mutation routes. Complete and delete accept both GET and POST, the
/// way the dashboard links invoke them.
///
/// ```text
/// GET      /tasks/{id}/edit      -> fetch one task
/// POST     /tasks/{id}/edit      -> overwrite title/priority/due date
/// GET|POST /tasks/{id}/complete  -> mark complete
/// GET|POST /tasks/{id}/delete    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks/{id}/edit", get(tasks::edit_form).post(tasks::update))
        .route(
            "/tasks/{id}/complete",
            get(tasks::complete).post(tasks::complete),
        )
        .route("/tasks/{id}/delete", get(tasks::delete).post(tasks::delete))
}
