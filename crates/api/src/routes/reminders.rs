//! Route definition for the manual reminder trigger.

use axum::routing::post;
use axum::Router;

use crate::handlers::reminders;
use crate::state::AppState;

/// ```text
/// POST /reminders/run  -> send due-date reminders (requires login)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reminders/run", post(reminders::run))
}
