//! Integration tests for the user and session repositories.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use taskpulse_db::models::session::CreateSession;
use taskpulse_db::models::user::CreateUser;
use taskpulse_db::repositories::{SessionRepo, UserRepo};

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "$argon2id$fake".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_and_lookup_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@test.com");

    let by_name = UserRepo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("user must be findable by username");
    assert_eq!(by_name.id, user.id);

    let by_id = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");

    assert!(UserRepo::username_exists(&pool, "alice").await.unwrap());
    assert!(!UserRepo::username_exists(&pool, "bob").await.unwrap());
}

#[sqlx::test]
async fn test_duplicate_username_violates_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("alice")).await.unwrap();

    let err = UserRepo::create(&pool, &new_user("alice"))
        .await
        .expect_err("second insert with the same username must fail");

    assert_matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.constraint() == Some("uq_users_username")
    );
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_session_lifecycle(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("carol")).await.unwrap();

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token_hash: "hash-1".to_string(),
            expires_at: Utc::now() + Duration::days(14),
        },
    )
    .await
    .unwrap();
    assert!(!session.is_revoked);

    let found = SessionRepo::find_active_by_token_hash(&pool, "hash-1")
        .await
        .unwrap()
        .expect("fresh session must be active");
    assert_eq!(found.user_id, user.id);

    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(SessionRepo::find_active_by_token_hash(&pool, "hash-1")
        .await
        .unwrap()
        .is_none());

    // Revoking twice reports nothing updated.
    assert!(!SessionRepo::revoke(&pool, session.id).await.unwrap());
}

#[sqlx::test]
async fn test_expired_session_is_not_active(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dave")).await.unwrap();

    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token_hash: "stale".to_string(),
            expires_at: Utc::now() - Duration::minutes(1),
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::find_active_by_token_hash(&pool, "stale")
        .await
        .unwrap()
        .is_none());

    let removed = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(removed, 1);
}
