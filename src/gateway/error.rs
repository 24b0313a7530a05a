use std::fmt::Display;

/// Non-2xx body returned by the donation backend.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug)]
pub enum GatewayError {
    RequestError(reqwest::Error),
    GatewayResponse { status: u16, body: ErrorResponse },
    /// Body did not parse; `status` is set once the backend has answered
    GatewayDeserialization {
        status: Option<u16>,
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// Backend answered and declined; everything else is a transport problem.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::GatewayResponse { .. })
    }

    pub fn deserialization(status: u16, source: serde_json::Error) -> Self {
        Self::GatewayDeserialization {
            status: Some(status),
            source,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::GatewayDeserialization {
            status: None,
            source: value,
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::RequestError(e) => Some(e),
            GatewayError::GatewayResponse { .. } => None,
            GatewayError::GatewayDeserialization { source, .. } => Some(source),
        }
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::RequestError(e) => write!(f, "http request error: {e}"),
            GatewayError::GatewayResponse { body, .. } => f.write_str(&body.message),
            GatewayError::GatewayDeserialization {
                status: Some(status),
                source,
            } => write!(f, "donation response deserialization (HTTP {status}): {source}"),
            GatewayError::GatewayDeserialization {
                status: None,
                source,
            } => write!(f, "donation response deserialization: {source}"),
        }
    }
}
