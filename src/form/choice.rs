use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Payment rails offered on the donation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentGateway {
    #[serde(rename = "M-Pesa")]
    MPesa,
    #[serde(rename = "Tigo Pesa")]
    TigoPesa,
    #[serde(rename = "Airtel Money")]
    AirtelMoney,
    Visa,
}

impl PaymentGateway {
    pub const ALL: [PaymentGateway; 4] = [
        PaymentGateway::MPesa,
        PaymentGateway::TigoPesa,
        PaymentGateway::AirtelMoney,
        PaymentGateway::Visa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MPesa => "M-Pesa",
            Self::TigoPesa => "Tigo Pesa",
            Self::AirtelMoney => "Airtel Money",
            Self::Visa => "Visa",
        }
    }

    /// Whether selecting this gateway reaches the donation backend.
    pub fn is_wired(&self) -> bool {
        matches!(self, Self::MPesa)
    }
}

impl Display for PaymentGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment gateway: {0}")]
pub struct UnknownGateway(pub String);

impl FromStr for PaymentGateway {
    type Err = UnknownGateway;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gateway| gateway.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGateway(s.to_string()))
    }
}

/// Quick-pick donation amounts in TSH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedAmount {
    Tsh500,
    Tsh1000,
    Tsh2000,
    Tsh5000,
}

impl PredefinedAmount {
    pub const ALL: [PredefinedAmount; 4] = [
        PredefinedAmount::Tsh500,
        PredefinedAmount::Tsh1000,
        PredefinedAmount::Tsh2000,
        PredefinedAmount::Tsh5000,
    ];

    pub fn value(&self) -> u32 {
        match self {
            Self::Tsh500 => 500,
            Self::Tsh1000 => 1000,
            Self::Tsh2000 => 2000,
            Self::Tsh5000 => 5000,
        }
    }
}

impl TryFrom<u32> for PredefinedAmount {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|amount| amount.value() == value)
            .ok_or(value)
    }
}

impl Display for PredefinedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
