use std::sync::Arc;

use taskpulse_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskpulse_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound notification capability (welcome mail, reminders).
    pub mailer: Arc<dyn Mailer>,
}
