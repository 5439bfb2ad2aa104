//! Handler for the manually-triggered reminder pass.

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::Serialize;
use taskpulse_mail::reminders::send_due_reminders;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result payload for a reminder run.
#[derive(Debug, Serialize)]
pub struct ReminderRunResult {
    /// Number of reminder mails actually sent.
    pub sent: usize,
}

/// POST /reminders/run
///
/// Send a reminder for every task due today and not completed, across all
/// owners. There is no internal scheduler and no send ledger: invoking this
/// twice re-sends for any task still unresolved.
pub async fn run(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ReminderRunResult>>> {
    let today = Local::now().date_naive();
    let sent = send_due_reminders(&state.pool, state.mailer.as_ref(), today).await?;

    Ok(Json(DataResponse {
        data: ReminderRunResult { sent },
    }))
}
