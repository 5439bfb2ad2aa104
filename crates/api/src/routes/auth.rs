//! Route definitions for account management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Account routes.
///
/// ```text
/// GET  /signup  -> signup form view
/// POST /signup  -> create account
/// GET  /login   -> login form view
/// POST /login   -> authenticate
/// GET  /logout  -> end session
/// POST /logout  -> end session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout).post(auth::logout))
}
