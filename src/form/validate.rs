use std::sync::LazyLock;

use regex::Regex;

// Character classes are spelled out: `\d` in `regex` matches every Unicode digit.
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digit pattern is valid"));
static FULL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("full name pattern is valid"));

/// Which validated field an edit targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    FullName,
    PhoneNumber,
}

/// Rejected field edit. The message is what the user is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount")]
    Amount,
    #[error("Please enter a valid full name")]
    FullName,
    #[error("Please enter a valid phone number")]
    PhoneNumber,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Amount => Field::Amount,
            Self::FullName => Field::FullName,
            Self::PhoneNumber => Field::PhoneNumber,
        }
    }
}

/// Empty input does not match and is rejected like any other invalid value.
pub fn amount(text: &str) -> Result<(), ValidationError> {
    DIGITS
        .is_match(text)
        .then_some(())
        .ok_or(ValidationError::Amount)
}

pub fn full_name(text: &str) -> Result<(), ValidationError> {
    FULL_NAME
        .is_match(text)
        .then_some(())
        .ok_or(ValidationError::FullName)
}

pub fn phone_number(text: &str) -> Result<(), ValidationError> {
    DIGITS
        .is_match(text)
        .then_some(())
        .ok_or(ValidationError::PhoneNumber)
}
