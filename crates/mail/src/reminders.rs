//! Due-date reminder pass.
//!
//! Selects every task due on the given day and not completed, across all
//! owners, and sends one reminder per task to the owner's email address.
//! Designed for manual/external triggering: there is no internal scheduler,
//! no send ledger, and no guard against overlapping invocations. Running the
//! pass twice re-sends reminders for any task still unresolved.

use chrono::NaiveDate;
use taskpulse_db::repositories::TaskRepo;
use taskpulse_db::DbPool;

use crate::mailer::Mailer;
use crate::messages::reminder_message;

/// Send a reminder for every incomplete task due on `today`.
///
/// Tasks whose owner has no email address on file are skipped. Individual
/// send failures are logged and swallowed so one bad address never aborts
/// the rest of the pass. Returns the number of reminders actually sent.
///
/// Only the task selection can fail; delivery is best-effort by design.
pub async fn send_due_reminders(
    pool: &DbPool,
    mailer: &dyn Mailer,
    today: NaiveDate,
) -> Result<usize, sqlx::Error> {
    let due = TaskRepo::list_due_on(pool, today).await?;

    let mut sent = 0;
    for task in &due {
        if task.owner_email.is_empty() {
            tracing::warn!(task_id = task.id, "Skipping reminder, owner has no email address");
            continue;
        }

        let (subject, body) = reminder_message(&task.title);
        match mailer.send(&subject, &body, &task.owner_email).await {
            Ok(()) => sent += 1,
            Err(e) => {
                tracing::warn!(
                    task_id = task.id,
                    to = %task.owner_email,
                    error = %e,
                    "Failed to send task reminder"
                );
            }
        }
    }

    if !due.is_empty() {
        tracing::info!(due = due.len(), sent, %today, "Reminder pass finished");
    }

    Ok(sent)
}
