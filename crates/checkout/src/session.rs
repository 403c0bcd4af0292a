//! Checkout session state machine.
//!
//! A session owns the wizard state: current stage, both forms, the
//! shipping selection, and the submission lifecycle. The cart and the
//! submission gateway are collaborators injected at construction; the
//! session reads the cart and clears it exactly once, after a successful
//! submission.
//!
//! Execution is single-threaded and event-driven. The only asynchronous
//! operation is order submission, and a session permits at most one
//! in-flight submission; `advance()` from review refuses re-entry while
//! one is pending.

use paperbound_core::SessionId;
use serde::Serialize;
use tracing::instrument;

use crate::cart::Cart;
use crate::catalog::{DEFAULT_SHIPPING_OPTION, ShippingOption, find_shipping_option};
use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, SubmissionError};
use crate::forms::{
    FormField, PaymentInfo, PaymentMethod, PaymentUpdate, ShippingInfo, ShippingUpdate,
};
use crate::stage::CheckoutStage;
use crate::submit::{OrderConfirmation, SubmitOrder};
use crate::summary::OrderSummary;

/// Submission lifecycle of a session.
///
/// Success has no variant of its own: a successful submission moves the
/// session to the terminal [`CheckoutStage::Confirmation`] stage and
/// stores the confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Failed,
}

/// One customer's trip through the checkout wizard.
pub struct CheckoutSession<C: Cart, S: SubmitOrder> {
    id: SessionId,
    config: CheckoutConfig,
    cart: C,
    gateway: S,
    stage: CheckoutStage,
    shipping: ShippingInfo,
    payment: PaymentInfo,
    selected_shipping: String,
    dirty: bool,
    submission: SubmissionState,
    confirmation: Option<OrderConfirmation>,
}

impl<C: Cart, S: SubmitOrder> CheckoutSession<C, S> {
    /// Start a checkout session over a non-empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines;
    /// there is nothing to check out and the caller should redirect to
    /// the cart page.
    pub fn new(cart: C, gateway: S, config: CheckoutConfig) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let id = SessionId::generate();
        tracing::debug!(session = %id, "checkout session started");
        Ok(Self {
            id,
            config,
            cart,
            gateway,
            stage: CheckoutStage::default(),
            shipping: ShippingInfo::default(),
            payment: PaymentInfo::default(),
            selected_shipping: DEFAULT_SHIPPING_OPTION.to_owned(),
            dirty: false,
            submission: SubmissionState::default(),
            confirmation: None,
        })
    }

    /// Session identifier, for logs and correlation.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Current wizard stage.
    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Shipping form as currently entered.
    #[must_use]
    pub const fn shipping(&self) -> &ShippingInfo {
        &self.shipping
    }

    /// Payment form as currently entered.
    #[must_use]
    pub const fn payment(&self) -> &PaymentInfo {
        &self.payment
    }

    /// Id of the selected shipping tier.
    #[must_use]
    pub fn selected_shipping(&self) -> &str {
        &self.selected_shipping
    }

    /// The selected catalog entry. Selection is validated on the way in,
    /// so this only misses if the compiled-in catalog itself changed.
    #[must_use]
    pub fn shipping_option(&self) -> Option<&'static ShippingOption> {
        find_shipping_option(&self.selected_shipping)
    }

    /// Whether any form field changed since the session started. Feeds
    /// the "unsaved changes" prompt; nothing in the core depends on it.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Submission lifecycle state.
    #[must_use]
    pub const fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// The confirmation, once an order has been placed.
    #[must_use]
    pub const fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Apply one shipping form update. Ignored once the session has
    /// reached confirmation.
    pub fn update_shipping(&mut self, update: ShippingUpdate) {
        if self.stage.is_terminal() {
            tracing::debug!(session = %self.id, "ignoring form update after confirmation");
            return;
        }
        self.shipping.apply(update);
        self.dirty = true;
    }

    /// Apply one payment form update (card number and expiry are masked
    /// on the way in). Ignored once the session has reached confirmation.
    pub fn update_payment(&mut self, update: PaymentUpdate) {
        if self.stage.is_terminal() {
            tracing::debug!(session = %self.id, "ignoring form update after confirmation");
            return;
        }
        self.payment.apply(update);
        self.dirty = true;
    }

    /// Select the payment method. Previously entered card fields are kept
    /// even when they stop being relevant.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        if self.stage.is_terminal() {
            return;
        }
        self.payment.method = method;
        self.dirty = true;
    }

    /// Select a shipping tier by catalog id.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownShippingOption`] for an id outside
    /// the catalog; the previous selection is kept, so the session never
    /// holds an unresolvable id.
    pub fn select_shipping_option(&mut self, id: &str) -> Result<(), CheckoutError> {
        if find_shipping_option(id).is_none() {
            return Err(CheckoutError::UnknownShippingOption(id.to_owned()));
        }
        if self.stage.is_terminal() {
            return Ok(());
        }
        self.selected_shipping = id.to_owned();
        self.dirty = true;
        Ok(())
    }

    /// Derive the order summary for the current cart and selection.
    ///
    /// Recomputed on every call - a summary is a projection, never state.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::compute(
            &self.cart.items(),
            crate::catalog::shipping_options(),
            &self.selected_shipping,
            self.config.tax_rate,
        )
    }

    /// Required shipping fields that are still empty.
    #[must_use]
    pub fn missing_shipping_fields(&self) -> Vec<FormField> {
        self.shipping.missing_fields()
    }

    /// Required payment fields that are still empty.
    #[must_use]
    pub fn missing_payment_fields(&self) -> Vec<FormField> {
        self.payment.missing_fields()
    }

    /// Whether the shipping stage guard passes.
    #[must_use]
    pub fn is_shipping_complete(&self) -> bool {
        self.shipping.is_complete()
    }

    /// Whether the payment stage guard passes.
    #[must_use]
    pub fn is_payment_complete(&self) -> bool {
        self.payment.is_complete()
    }

    /// Whether the advance control should be enabled for the current
    /// stage. This is the same predicate `advance()` enforces.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        if self.cart.is_empty() {
            return false;
        }
        match self.stage {
            CheckoutStage::Shipping => self.shipping.is_complete(),
            CheckoutStage::Payment => self.payment.is_complete(),
            CheckoutStage::Review => self.submission != SubmissionState::InFlight,
            CheckoutStage::Confirmation => false,
        }
    }

    /// Attempt a forward transition.
    ///
    /// From the form stages this checks the completeness guard; from
    /// review it submits the order through the gateway, clears the cart
    /// on success, and lands on confirmation. From confirmation it is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::ValidationIncomplete`] when a guard refuses,
    ///   with the specific missing fields; the stage is unchanged.
    /// - [`CheckoutError::EmptyCart`] if the cart emptied mid-wizard.
    /// - [`CheckoutError::SubmissionInFlight`] if a submission is already
    ///   pending.
    /// - [`CheckoutError::Submission`] when the gateway fails; the
    ///   session stays in review and the cart is untouched.
    #[instrument(skip_all, fields(session = %self.id, stage = %self.stage))]
    pub async fn advance(&mut self) -> Result<CheckoutStage, CheckoutError> {
        if self.stage.is_terminal() {
            return Ok(self.stage);
        }
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        match self.stage {
            CheckoutStage::Shipping => {
                self.guard(self.shipping.missing_fields())?;
                self.stage = CheckoutStage::Payment;
            }
            CheckoutStage::Payment => {
                self.guard(self.payment.missing_fields())?;
                self.stage = CheckoutStage::Review;
            }
            CheckoutStage::Review => {
                self.place_order().await?;
            }
            CheckoutStage::Confirmation => {}
        }

        tracing::info!(stage = %self.stage, "advanced");
        Ok(self.stage)
    }

    /// Move one stage backward: review to payment, payment to shipping.
    ///
    /// No guard applies and no form data is touched - going back to fix
    /// an earlier step must never lose what was already entered. A no-op
    /// from shipping and from confirmation.
    pub fn retreat(&mut self) -> CheckoutStage {
        if let Some(previous) = self.stage.previous() {
            tracing::debug!(session = %self.id, from = %self.stage, to = %previous, "retreated");
            self.stage = previous;
        }
        self.stage
    }

    fn guard(&self, missing: Vec<FormField>) -> Result<(), CheckoutError> {
        if missing.is_empty() {
            return Ok(());
        }
        tracing::debug!(stage = %self.stage, ?missing, "guard refused advance");
        Err(CheckoutError::ValidationIncomplete {
            stage: self.stage,
            missing,
        })
    }

    async fn place_order(&mut self) -> Result<(), CheckoutError> {
        if self.submission == SubmissionState::InFlight {
            return Err(CheckoutError::SubmissionInFlight);
        }

        let summary = self.summary();
        self.submission = SubmissionState::InFlight;

        let submitted = self
            .gateway
            .submit(&self.shipping, &self.payment, &summary);
        let result = match self.config.submission_timeout {
            Some(limit) => match tokio::time::timeout(limit, submitted).await {
                Ok(result) => result,
                Err(_) => Err(SubmissionError::TimedOut(limit)),
            },
            None => submitted.await,
        };

        match result {
            Ok(confirmation) => {
                self.cart.clear();
                self.submission = SubmissionState::Idle;
                self.confirmation = Some(confirmation);
                self.stage = CheckoutStage::Confirmation;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "order submission failed");
                self.submission = SubmissionState::Failed;
                Err(err.into())
            }
        }
    }
}
