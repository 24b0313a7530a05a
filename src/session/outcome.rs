use crate::{form::ValidationError, session::notify::Notification};

/// Result of one payment attempt that reached the backend (or tried to).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success { transaction_id: String },
    Failure { message: String },
    TransportError { message: String },
}

impl PaymentOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            Self::Success { transaction_id } => Notification::new(
                "Payment Successful",
                format!("Transaction ID: {transaction_id}"),
            ),
            Self::Failure { message } => Notification::new("Payment Failed", message),
            Self::TransportError { message } => Notification::new("Payment Error", message),
        }
    }
}

/// What a payment trigger ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// No gateway chosen, or the gateway is not wired to the backend
    Skipped,
    /// Another payment for this session was still in flight
    Busy,
    Completed(PaymentOutcome),
}

impl Submission {
    pub fn outcome(&self) -> Option<&PaymentOutcome> {
        match self {
            Self::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }
}

pub(crate) fn busy_notification() -> Notification {
    Notification::new(
        "Payment In Progress",
        "A payment for this campaign is already being processed",
    )
}

impl From<ValidationError> for Notification {
    fn from(value: ValidationError) -> Self {
        Notification::title_only(value.to_string())
    }
}
