//! Request handlers.
//!
//! Each submodule covers one resource. Handlers delegate to the repositories
//! in `taskpulse_db` and map errors via [`crate::error::AppError`]; every
//! task operation is scoped to the identity resolved by
//! [`crate::middleware::auth::AuthUser`].

pub mod auth;
pub mod dashboard;
pub mod reminders;
pub mod tasks;
