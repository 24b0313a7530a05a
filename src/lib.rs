//! Donation form for a fundraising campaign with M-Pesa payment submission.
//!
//! The crate is split in 3 main modules:
//!
//! - [form] (form snapshot and per-field validation)
//! - [gateway] (donation backend client)
//! - [session] (form state holder wired to the backend and the host's notifier)

pub mod config;
/// Donation form state
///
/// Immutable snapshots of the form and the rules each field is checked against.
pub mod form;
/// Donation backend integration
///
/// This module defines the types and methods to communicate with the donation backend over `POST /donate`.
pub mod gateway;
/// Line-oriented host that drives a session from text commands
pub mod host;
pub mod session;

pub use config::Config;
pub use form::{DonationForm, FieldIndicator, PaymentGateway, PredefinedAmount};
pub use session::{
    DonationSession,
    notify::{Notification, Notifier},
    outcome::{PaymentOutcome, Submission},
};
