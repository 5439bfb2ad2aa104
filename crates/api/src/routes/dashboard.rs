//! Route definitions for the dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes.
///
/// ```text
/// GET  /           -> redirect to /dashboard
/// GET  /dashboard  -> filtered list + stats
/// POST /dashboard  -> create task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::root))
        .route(
            "/dashboard",
            get(dashboard::show).post(dashboard::create_task),
        )
}
