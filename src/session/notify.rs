use std::fmt::Display;

/// One-line alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Some(message.into()),
        }
    }

    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.title, message),
            None => f.write_str(&self.title),
        }
    }
}

/// The host's alerting mechanism.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("[{notification}]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_title_and_message() {
        assert_eq!(
            Notification::new("Payment Successful", "Transaction ID: TX1").to_string(),
            "Payment Successful: Transaction ID: TX1"
        );
        assert_eq!(
            Notification::title_only("Please enter a valid amount").to_string(),
            "Please enter a valid amount"
        );
    }
}
