//! Handlers for account management: signup, login, logout.
//!
//! Account-form failures (mismatched passwords, taken username, bad
//! credentials) are surfaced as a flash code in a redirect back to the form,
//! never as an exception; the form GET maps the code to a user-visible
//! message. Login failure is deliberately generic so the response never
//! reveals whether the username exists.

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use taskpulse_core::types::DbId;
use taskpulse_db::models::session::CreateSession;
use taskpulse_db::models::user::CreateUser;
use taskpulse_db::repositories::{SessionRepo, UserRepo};
use taskpulse_mail::messages::welcome_message;
use validator::Validate;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::auth::session_token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, SESSION_COOKIE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Flash codes
// ---------------------------------------------------------------------------

const FLASH_PASSWORD_MISMATCH: &str = "password_mismatch";
const FLASH_USERNAME_TAKEN: &str = "username_taken";
const FLASH_WEAK_PASSWORD: &str = "weak_password";
const FLASH_INVALID_INPUT: &str = "invalid_input";
const FLASH_INVALID_CREDENTIALS: &str = "invalid_credentials";

/// Map a flash code from the query string to its user-visible message.
fn flash_message(code: &str) -> Option<String> {
    match code {
        FLASH_PASSWORD_MISMATCH => Some("Passwords do not match".to_string()),
        FLASH_USERNAME_TAKEN => Some("Username already exists".to_string()),
        FLASH_WEAK_PASSWORD => Some(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )),
        FLASH_INVALID_INPUT => Some("Username and a valid email address are required".to_string()),
        FLASH_INVALID_CREDENTIALS => Some("Invalid credentials".to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query params carrying an optional flash code back to a form view.
#[derive(Debug, Deserialize)]
pub struct FlashQuery {
    pub error: Option<String>,
}

/// View model for the signup and login forms.
#[derive(Debug, Serialize)]
pub struct FormView {
    /// User-visible message from a failed earlier submission, if any.
    pub error: Option<String>,
}

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub password1: String,
    pub password2: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Form views
// ---------------------------------------------------------------------------

/// GET /signup
pub async fn signup_form(Query(query): Query<FlashQuery>) -> Json<FormView> {
    Json(FormView {
        error: query.error.as_deref().and_then(flash_message),
    })
}

/// GET /login
pub async fn login_form(Query(query): Query<FlashQuery>) -> Json<FormView> {
    Json(FormView {
        error: query.error.as_deref().and_then(flash_message),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Create an account. Validation failures bounce back to the signup form
/// with a flash code and leave no account behind. On success the user is
/// logged in immediately and a welcome mail goes out best-effort.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<Response> {
    if input.validate().is_err() {
        return Ok(signup_retry(FLASH_INVALID_INPUT));
    }

    if input.password1 != input.password2 {
        return Ok(signup_retry(FLASH_PASSWORD_MISMATCH));
    }

    if validate_password_strength(&input.password1, MIN_PASSWORD_LENGTH).is_err() {
        return Ok(signup_retry(FLASH_WEAK_PASSWORD));
    }

    if UserRepo::username_exists(&state.pool, &input.username).await? {
        return Ok(signup_retry(FLASH_USERNAME_TAKEN));
    }

    let password_hash = hash_password(&input.password1)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // The uq_users_username constraint backstops the existence check above
    // against concurrent signups; a race surfaces as a 409.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Account created");

    // Best-effort: a failed welcome mail must not fail the signup.
    let (subject, body) = welcome_message(&user.username);
    if let Err(e) = state.mailer.send(&subject, &body, &user.email).await {
        tracing::warn!(user_id = user.id, error = %e, "Failed to send welcome email");
    }

    let cookie = establish_session(&state, user.id).await?;
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/dashboard")).into_response())
}

/// POST /login
///
/// Verify credentials and establish a session. The failure message is
/// identical for an unknown username and a wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    let user = match UserRepo::find_by_username(&state.pool, &input.username).await? {
        Some(user) => user,
        None => return Ok(login_retry()),
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Ok(login_retry());
    }

    tracing::info!(user_id = user.id, "Login succeeded");

    let cookie = establish_session(&state, user.id).await?;
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/dashboard")).into_response())
}

/// GET|POST /logout
///
/// Revoke the current session and clear the cookie.
pub async fn logout(auth: AuthUser, State(state): State<AppState>) -> AppResult<Response> {
    SessionRepo::revoke(&state.pool, auth.session_id).await?;

    let cleared = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    Ok((AppendHeaders([(SET_COOKIE, cleared)]), Redirect::to("/login")).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn signup_retry(code: &str) -> Response {
    Redirect::to(&format!("/signup?error={code}")).into_response()
}

fn login_retry() -> Response {
    Redirect::to(&format!("/login?error={FLASH_INVALID_CREDENTIALS}")).into_response()
}

/// Create a session row for the user and build the matching cookie.
async fn establish_session(state: &AppState, user_id: DbId) -> AppResult<String> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::days(state.config.session_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    let max_age = state.config.session_expiry_days * 24 * 60 * 60;
    Ok(format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
    ))
}
