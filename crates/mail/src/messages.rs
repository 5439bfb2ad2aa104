//! Subject/body templates for the notifications this app sends.

/// Welcome notification sent after a successful signup.
pub fn welcome_message(username: &str) -> (String, String) {
    (
        "Welcome to Taskpulse".to_string(),
        format!(
            "Hi {username},\n\n\
             Your account has been created successfully. You can now log in\n\
             and start tracking your tasks.\n"
        ),
    )
}

/// Reminder notification for a task due today.
pub fn reminder_message(title: &str) -> (String, String) {
    (
        "Task Reminder".to_string(),
        format!("Reminder: '{title}' is due today.\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_message_addresses_the_user() {
        let (subject, body) = welcome_message("alice");
        assert_eq!(subject, "Welcome to Taskpulse");
        assert!(body.contains("Hi alice"));
    }

    #[test]
    fn reminder_message_names_the_task() {
        let (subject, body) = reminder_message("Pay rent");
        assert_eq!(subject, "Task Reminder");
        assert!(body.contains("'Pay rent' is due today"));
    }
}
