//! Route definitions, one module per resource.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod reminders;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                          redirect to dashboard (requires login)
/// /dashboard                 list/filter/create (requires login)
/// /tasks/{id}/edit           view/update one task (requires login)
/// /tasks/{id}/complete       mark complete (requires login)
/// /tasks/{id}/delete         delete (requires login)
/// /signup                    form + create account (public)
/// /login                     form + authenticate (public)
/// /logout                    end session (requires login)
/// /reminders/run             trigger the reminder pass (requires login)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(tasks::router())
        .merge(reminders::router())
}
