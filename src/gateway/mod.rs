use crate::{
    config::Config,
    gateway::error::{ErrorResponse, GatewayError},
    session::interaction_log::InteractionSpan,
};

/// `POST /donate` payloads
pub mod donate;
pub mod error;
/// Type conversions between the form, the wire types and session outcomes
mod from;
/// Personal data masking for logs
pub mod mask;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// HTTP client for the donation backend.
#[derive(Debug, Clone)]
pub struct DonationGateway {
    client: reqwest::Client,
    base_url: String,
}

impl DonationGateway {
    const DONATE_PATH: &str = "donate";

    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn donate_url(&self) -> String {
        format!("{}/{}", self.base_url, Self::DONATE_PATH)
    }

    /// Sends a single donation request. No retries.
    pub async fn donate(
        &self,
        request: &donate::PaymentRequest<'_>,
        span: &mut InteractionSpan,
    ) -> Result<donate::DonateOkData> {
        let secured_request = mask::secure_serializable(request);
        let url = self.donate_url();
        tracing::debug!(%url, data = %secured_request, "Donation API payment request");
        span.set_request(url.clone(), &secured_request);

        let res = self.client.post(&url).json(request).send().await?;
        let status = res.status();
        let code = status.as_u16();
        span.set_response_status(code);

        let body = res.bytes().await?;
        let response = serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| GatewayError::deserialization(code, e))?;
        let secured_response = mask::secure_value(&response);
        span.set_response(&secured_response);
        tracing::debug!(%status, data = %secured_response, "Donation API payment response");

        if status.is_success() {
            serde_json::from_value(response).map_err(|e| GatewayError::deserialization(code, e))
        } else {
            let body: ErrorResponse = serde_json::from_value(response)
                .map_err(|e| GatewayError::deserialization(code, e))?;
            Err(GatewayError::GatewayResponse { status: code, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donate_url_joins_without_double_slash() {
        let gateway =
            DonationGateway::new(&Config::default().with_api_url("http://pay.local:3000/"))
                .unwrap();
        assert_eq!(gateway.donate_url(), "http://pay.local:3000/donate");
    }
}
