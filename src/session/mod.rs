use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::watch;
use tracing::instrument;

use crate::{
    config::Config,
    form::{
        DonationForm, FieldIndicator, PaymentGateway, PredefinedAmount, ValidationError,
    },
    gateway::{self, DonationGateway, donate},
    session::{
        interaction_log::InteractionSpan,
        notify::Notifier,
        outcome::{PaymentOutcome, Submission},
    },
};

pub mod interaction_log;
pub mod notify;
pub mod outcome;

/// Donation form for a single campaign, wired to the donation backend.
///
/// Field edits replace the form snapshot wholesale and never fail: a rejected
/// value clears its field, flips the indicator and notifies the user.
/// Payment triggers notify the user exactly once when they do anything at all.
pub struct DonationSession {
    campaign_id: String,
    form: watch::Sender<DonationForm>,
    gateway: DonationGateway,
    notifier: Arc<dyn Notifier>,
    single_flight: bool,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the submission finishes.
struct InFlightGuard<'a>(Option<&'a AtomicBool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Some(flag) = self.0 {
            flag.store(false, Ordering::Release);
        }
    }
}

impl DonationSession {
    pub fn new(
        campaign_id: impl Into<String>,
        config: &Config,
        notifier: Arc<dyn Notifier>,
    ) -> gateway::Result<Self> {
        let gateway = DonationGateway::new(config)?;
        Ok(Self::with_gateway(
            campaign_id,
            gateway,
            notifier,
            config.single_flight,
        ))
    }

    pub fn with_gateway(
        campaign_id: impl Into<String>,
        gateway: DonationGateway,
        notifier: Arc<dyn Notifier>,
        single_flight: bool,
    ) -> Self {
        let campaign_id = campaign_id.into();
        let (form, _) = watch::channel(DonationForm::new(campaign_id.clone()));
        Self {
            campaign_id,
            form,
            gateway,
            notifier,
            single_flight,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    /// Current form snapshot.
    pub fn form(&self) -> DonationForm {
        self.form.borrow().clone()
    }

    /// Receiver that observes every snapshot replacement.
    pub fn subscribe(&self) -> watch::Receiver<DonationForm> {
        self.form.subscribe()
    }

    pub fn set_amount(&self, text: &str) -> FieldIndicator {
        self.edit(|form| form.with_amount(text))
    }

    pub fn set_full_name(&self, text: &str) -> FieldIndicator {
        self.edit(|form| form.with_full_name(text))
    }

    pub fn set_phone_number(&self, text: &str) -> FieldIndicator {
        self.edit(|form| form.with_phone_number(text))
    }

    pub fn set_email(&self, text: &str) {
        self.form.send_modify(|form| *form = form.with_email(text));
    }

    pub fn select_predefined_amount(&self, amount: PredefinedAmount) {
        self.form
            .send_modify(|form| *form = form.with_predefined_amount(amount));
    }

    /// Records the gateway without submitting.
    pub fn choose_gateway(&self, gateway: PaymentGateway) {
        self.form.send_modify(|form| *form = form.with_gateway(gateway));
    }

    /// Records the gateway and submits the payment right away.
    pub async fn select_gateway(&self, gateway: PaymentGateway) -> Submission {
        self.choose_gateway(gateway);
        self.submit(Some(gateway)).await
    }

    /// "Make Payment": submits with whichever gateway is currently recorded.
    pub async fn submit_payment(&self) -> Submission {
        let gateway = self.form.borrow().payment_gateway;
        self.submit(gateway).await
    }

    fn edit(
        &self,
        apply: impl FnOnce(&DonationForm) -> Result<DonationForm, ValidationError>,
    ) -> FieldIndicator {
        let mut rejection = None;
        self.form.send_modify(|form| match apply(&*form) {
            Ok(next) => *form = next,
            Err(e) => {
                *form = form.rejecting(e.field());
                rejection = Some(e);
            }
        });
        match rejection {
            Some(e) => {
                tracing::debug!(field = ?e.field(), "Rejected form input");
                self.notifier.notify(e.into());
                FieldIndicator::Invalid
            }
            None => self.form.borrow().indicator,
        }
    }

    fn acquire(&self) -> Option<InFlightGuard<'_>> {
        if !self.single_flight {
            return Some(InFlightGuard(None));
        }
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| InFlightGuard(Some(&self.in_flight)))
    }

    #[instrument(skip_all, fields(campaign_id = %self.campaign_id))]
    async fn submit(&self, gateway: Option<PaymentGateway>) -> Submission {
        let Some(gateway) = gateway.filter(PaymentGateway::is_wired) else {
            tracing::debug!(?gateway, "Gateway is not wired to the donation backend");
            return Submission::Skipped;
        };
        let Some(_guard) = self.acquire() else {
            tracing::warn!("Payment is already in flight, refusing another submission");
            self.notifier.notify(outcome::busy_notification());
            return Submission::Busy;
        };

        let form = self.form();
        let request = donate::PaymentRequest::from((&form, gateway));
        let mut span = InteractionSpan::enter();
        let result = self.gateway.donate(&request, &mut span).await;

        match &result {
            Ok(data) => {
                tracing::info!(transaction_id = %data.transaction_id, "Donation accepted")
            }
            Err(e) if e.is_rejection() => {
                tracing::warn!(status = ?span.response_status(), "Donation rejected: {e}")
            }
            Err(e) => tracing::error!("Failed to submit donation: {e}"),
        }
        let log = span.finish("donate", &self.campaign_id, gateway);
        tracing::debug!(
            interaction = %serde_json::to_value(&log).unwrap_or_default(),
            "Donation API interaction"
        );

        let outcome = PaymentOutcome::from(result);
        self.notifier.notify(outcome.notification());
        Submission::Completed(outcome)
    }
}
