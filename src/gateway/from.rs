use crate::{
    form::{DonationForm, PaymentGateway},
    gateway::{self, donate, error::GatewayError},
    session::outcome::PaymentOutcome,
};

impl<'a> From<(&'a DonationForm, PaymentGateway)> for donate::PaymentRequest<'a> {
    fn from((form, gateway): (&'a DonationForm, PaymentGateway)) -> Self {
        donate::PaymentRequest {
            campaign_id: form.campaign_id(),
            amount: &form.amount,
            full_name: &form.full_name,
            email: &form.email,
            phone_number: &form.phone_number,
            payment_gateway: gateway,
        }
    }
}

impl From<gateway::Result<donate::DonateOkData>> for PaymentOutcome {
    fn from(value: gateway::Result<donate::DonateOkData>) -> Self {
        match value {
            Ok(data) => PaymentOutcome::Success {
                transaction_id: data.transaction_id,
            },
            Err(GatewayError::GatewayResponse { body, .. }) => PaymentOutcome::Failure {
                message: body.message,
            },
            Err(e) => PaymentOutcome::TransportError {
                message: e.to_string(),
            },
        }
    }
}
