//! Outbound notification delivery.
//!
//! Exposes a small [`Mailer`] capability (subject, body, recipient) with an
//! SMTP implementation over `lettre`, plus the due-date reminder pass. Every
//! caller in the workspace treats delivery as best-effort: a failed send is
//! logged and swallowed, never propagated to the requester.

pub mod mailer;
pub mod messages;
pub mod reminders;

pub use mailer::{EmailConfig, EmailError, Mailer, MemoryMailer, NoopMailer, SmtpMailer};
