//! Integration tests for the due-date reminder pass.

use chrono::NaiveDate;
use sqlx::PgPool;
use taskpulse_db::models::task::{CreateTask, TaskPriority};
use taskpulse_db::models::user::CreateUser;
use taskpulse_db::repositories::{TaskRepo, UserRepo};
use taskpulse_mail::reminders::send_due_reminders;
use taskpulse_mail::MemoryMailer;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

async fn create_user(pool: &PgPool, username: &str, email: &str) -> taskpulse_db::models::user::User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
        },
    )
    .await
    .unwrap()
}

async fn create_due_task(pool: &PgPool, owner: i64, title: &str) {
    TaskRepo::create(
        pool,
        owner,
        &CreateTask {
            title: title.to_string(),
            priority: TaskPriority::High,
            due_date: Some(today()),
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sends_one_reminder_per_due_task(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@test.com").await;
    let bob = create_user(&pool, "bob", "bob@test.com").await;

    create_due_task(&pool, alice.id, "Pay rent").await;
    create_due_task(&pool, alice.id, "Water plants").await;
    create_due_task(&pool, bob.id, "Call dentist").await;

    let mailer = MemoryMailer::new();
    let sent = send_due_reminders(&pool, &mailer, today()).await.unwrap();
    assert_eq!(sent, 3);

    let messages = mailer.sent();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m.subject == "Task Reminder"));

    let to_alice = messages
        .iter()
        .filter(|m| m.recipient == "alice@test.com")
        .count();
    assert_eq!(to_alice, 2);
    assert!(messages
        .iter()
        .any(|m| m.recipient == "bob@test.com" && m.body.contains("'Call dentist'")));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_without_email_is_skipped(pool: PgPool) {
    let ghost = create_user(&pool, "ghost", "").await;
    create_due_task(&pool, ghost.id, "Unreachable").await;

    let mailer = MemoryMailer::new();
    let sent = send_due_reminders(&pool, &mailer, today()).await.unwrap();

    assert_eq!(sent, 0);
    assert!(mailer.sent().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_send_failure_does_not_abort_the_pass(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@test.com").await;
    let bounce = create_user(&pool, "bounce", "bounce@test.com").await;

    create_due_task(&pool, bounce.id, "Never arrives").await;
    create_due_task(&pool, alice.id, "Still arrives").await;

    let mailer = MemoryMailer::rejecting("bounce@test.com");
    let sent = send_due_reminders(&pool, &mailer, today()).await.unwrap();

    // The failed send is swallowed; the remaining task still gets its mail.
    assert_eq!(sent, 1);
    let messages = mailer.sent();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].recipient, "alice@test.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rerun_resends_for_unresolved_tasks(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@test.com").await;
    create_due_task(&pool, alice.id, "Pay rent").await;

    let mailer = MemoryMailer::new();
    send_due_reminders(&pool, &mailer, today()).await.unwrap();
    send_due_reminders(&pool, &mailer, today()).await.unwrap();

    // Re-running is safe but not deduplicating: two invocations, two mails.
    assert_eq!(mailer.sent().len(), 2);
}
