use std::time::Instant;

use serde::Serialize;
use time::OffsetDateTime;

use crate::form::PaymentGateway;

#[derive(Debug, Serialize)]
struct Request {
    url: String,
    body: serde_json::Value,
}

/// Record of one exchange with the donation backend. Bodies are already masked.
#[derive(Debug, Serialize)]
pub struct InteractionLog {
    campaign_id: String,
    gateway: PaymentGateway,
    kind: &'static str,
    request: Option<Request>,
    status: Option<u16>,
    response: Option<serde_json::Value>,
    #[serde(with = "time::serde::rfc3339")]
    started_at: OffsetDateTime,
    duration_ms: u128,
}

/// Collects one donation exchange while it is in flight.
#[derive(Debug)]
pub struct InteractionSpan {
    started: Instant,
    started_at: OffsetDateTime,
    request: Option<Request>,
    response: Option<serde_json::Value>,
    response_status: Option<u16>,
}

impl InteractionSpan {
    pub fn enter() -> Self {
        Self {
            started: Instant::now(),
            started_at: OffsetDateTime::now_utc(),
            request: None,
            response: None,
            response_status: None,
        }
    }

    pub fn set_request(&mut self, url: String, body: &serde_json::Value) {
        self.request = Some(Request {
            url,
            body: body.clone(),
        });
    }

    pub fn set_response(&mut self, body: &serde_json::Value) {
        self.response = Some(body.clone());
    }

    pub fn set_response_status(&mut self, status: u16) {
        self.response_status = Some(status);
    }

    pub fn response_status(&self) -> Option<u16> {
        self.response_status
    }

    pub fn finish(
        self,
        kind: &'static str,
        campaign_id: &str,
        gateway: PaymentGateway,
    ) -> InteractionLog {
        InteractionLog {
            campaign_id: campaign_id.to_string(),
            gateway,
            kind,
            request: self.request,
            status: self.response_status,
            response: self.response,
            started_at: self.started_at,
            duration_ms: self.started.elapsed().as_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_carries_recorded_exchange() {
        let mut span = InteractionSpan::enter();
        span.set_request(
            "http://localhost:3000/donate".into(),
            &serde_json::json!({ "amount": "500" }),
        );
        span.set_response_status(402);
        span.set_response(&serde_json::json!({ "message": "Insufficient funds" }));
        assert_eq!(span.response_status(), Some(402));

        let log = span.finish("donate", "camp-1", PaymentGateway::MPesa);
        let log = serde_json::to_value(log).unwrap();
        assert_eq!(log["kind"], "donate");
        assert_eq!(log["gateway"], "M-Pesa");
        assert_eq!(log["campaign_id"], "camp-1");
        assert_eq!(log["status"], 402);
        assert_eq!(log["request"]["body"]["amount"], "500");
        assert_eq!(log["response"]["message"], "Insufficient funds");
        assert!(log["started_at"].is_string());
    }

    #[test]
    fn unanswered_exchange_has_no_status() {
        let log = InteractionSpan::enter().finish("donate", "camp-1", PaymentGateway::MPesa);
        let log = serde_json::to_value(log).unwrap();
        assert!(log["status"].is_null());
        assert!(log["response"].is_null());
    }
}
