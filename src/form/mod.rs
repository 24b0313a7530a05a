/// Fixed gateway and amount choices
mod choice;
/// Per-field input rules
pub mod validate;

pub use choice::{PaymentGateway, PredefinedAmount, UnknownGateway};
pub use validate::{Field, ValidationError};

/// Visual cue for the most recently validated input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FieldIndicator {
    #[default]
    Neutral,
    Invalid,
}

/// Snapshot of the donation form. Every edit produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationForm {
    campaign_id: String,
    pub amount: String,
    pub payment_gateway: Option<PaymentGateway>,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub indicator: FieldIndicator,
}

impl DonationForm {
    pub fn new(campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            amount: String::new(),
            payment_gateway: None,
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            indicator: FieldIndicator::Neutral,
        }
    }

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    pub fn with_amount(&self, text: &str) -> Result<Self, ValidationError> {
        validate::amount(text)?;
        Ok(Self {
            amount: text.to_string(),
            indicator: FieldIndicator::Neutral,
            ..self.clone()
        })
    }

    pub fn with_full_name(&self, text: &str) -> Result<Self, ValidationError> {
        validate::full_name(text)?;
        Ok(Self {
            full_name: text.to_string(),
            indicator: FieldIndicator::Neutral,
            ..self.clone()
        })
    }

    pub fn with_phone_number(&self, text: &str) -> Result<Self, ValidationError> {
        validate::phone_number(text)?;
        Ok(Self {
            phone_number: text.to_string(),
            indicator: FieldIndicator::Neutral,
            ..self.clone()
        })
    }

    /// Email is stored as typed and leaves the indicator alone.
    pub fn with_email(&self, text: &str) -> Self {
        Self {
            email: text.to_string(),
            ..self.clone()
        }
    }

    pub fn with_predefined_amount(&self, amount: PredefinedAmount) -> Self {
        Self {
            amount: amount.to_string(),
            indicator: FieldIndicator::Neutral,
            ..self.clone()
        }
    }

    pub fn with_gateway(&self, gateway: PaymentGateway) -> Self {
        Self {
            payment_gateway: Some(gateway),
            ..self.clone()
        }
    }

    /// Snapshot after a rejected edit: the field is cleared and flagged.
    pub fn rejecting(&self, field: Field) -> Self {
        let mut next = self.clone();
        match field {
            Field::Amount => next.amount.clear(),
            Field::FullName => next.full_name.clear(),
            Field::PhoneNumber => next.phone_number.clear(),
        }
        next.indicator = FieldIndicator::Invalid;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(
        form: &DonationForm,
        apply: impl FnOnce(&DonationForm) -> Result<DonationForm, ValidationError>,
    ) -> DonationForm {
        apply(form).unwrap_or_else(|e| form.rejecting(e.field()))
    }

    #[test]
    fn new_form_is_empty_and_neutral() {
        let form = DonationForm::new("campaign-1");
        assert_eq!(form.campaign_id(), "campaign-1");
        assert!(form.amount.is_empty());
        assert!(form.payment_gateway.is_none());
        assert_eq!(form.indicator, FieldIndicator::Neutral);
    }

    #[test]
    fn invalid_amount_clears_field_and_flags_indicator() {
        let form = DonationForm::new("c").with_amount("1500").unwrap();
        let form = edit(&form, |f| f.with_amount("abc"));
        assert_eq!(form.amount, "");
        assert_eq!(form.indicator, FieldIndicator::Invalid);
    }

    #[test]
    fn valid_edit_resets_indicator() {
        let form = edit(&DonationForm::new("c"), |f| f.with_full_name("John123"));
        assert_eq!(form.full_name, "");
        assert_eq!(form.indicator, FieldIndicator::Invalid);

        let form = edit(&form, |f| f.with_phone_number("255712345678"));
        assert_eq!(form.phone_number, "255712345678");
        assert_eq!(form.indicator, FieldIndicator::Neutral);
    }

    #[test]
    fn rejection_only_clears_the_edited_field() {
        let form = DonationForm::new("c")
            .with_amount("1000")
            .and_then(|f| f.with_full_name("Jane Doe"))
            .unwrap();
        let form = edit(&form, |f| f.with_phone_number("07x"));
        assert_eq!(form.amount, "1000");
        assert_eq!(form.full_name, "Jane Doe");
        assert_eq!(form.phone_number, "");
    }

    #[test]
    fn email_is_never_validated() {
        let form = DonationForm::new("c").rejecting(Field::Amount);
        for text in ["", "not an email", "j@x.com", "  "] {
            let next = form.with_email(text);
            assert_eq!(next.email, text);
            assert_eq!(next.indicator, FieldIndicator::Invalid);
        }
    }

    #[test]
    fn predefined_amount_sets_text_and_neutral_indicator() {
        let form = DonationForm::new("c").rejecting(Field::Amount);
        for amount in PredefinedAmount::ALL {
            let next = form.with_predefined_amount(amount);
            assert_eq!(next.amount, amount.value().to_string());
            assert_eq!(next.indicator, FieldIndicator::Neutral);
        }
    }

    #[test]
    fn gateway_choice_keeps_other_fields() {
        let form = DonationForm::new("c").with_amount("500").unwrap();
        let next = form.with_gateway(PaymentGateway::Visa);
        assert_eq!(next.payment_gateway, Some(PaymentGateway::Visa));
        assert_eq!(next.amount, "500");
    }
}
