use crate::form::PaymentGateway;

/// Body of `POST /donate`: the form as it stood when payment was triggered.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest<'a> {
    pub campaign_id: &'a str,
    pub amount: &'a str,
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub payment_gateway: PaymentGateway,
}

/// 2xx body. Fields other than the transaction id are ignored.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateOkData {
    pub transaction_id: String,
}
