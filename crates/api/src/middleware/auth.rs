//! Session-based login guard for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use taskpulse_core::types::DbId;
use taskpulse_db::repositories::SessionRepo;

use crate::auth::session_token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Name of the session cookie issued on login/signup.
pub const SESSION_COOKIE: &str = "session";

/// Authenticated user extracted from the session cookie (or a Bearer token).
///
/// Use this as an extractor parameter in any handler that requires a login.
/// The extractor resolves the token against the session store; requests
/// without a live session are redirected to `/login` instead of reaching the
/// handler:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id. Every task query is scoped to this.
    pub user_id: DbId,
    /// The session row backing this request, for logout revocation.
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or(AppError::Unauthenticated)?;

        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(&token))
            .await?
            .ok_or(AppError::Unauthenticated)?;

        Ok(AuthUser {
            user_id: session.user_id,
            session_id: session.id,
        })
    }
}

/// Pull the session token from the `session` cookie, falling back to an
/// `Authorization: Bearer` header for non-browser clients.
fn extract_token(parts: &Parts) -> Option<String> {
    for header in parts.headers.get_all(COOKIE) {
        let Ok(value) = header.to_str() else { continue };
        for pair in value.split(';') {
            let Some(rest) = pair.trim().strip_prefix(SESSION_COOKIE) else {
                continue;
            };
            if let Some(token) = rest.strip_prefix('=') {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}
