//! Order submission.
//!
//! Submission is an abstract asynchronous operation behind the
//! [`SubmitOrder`] trait, so the session can be driven by the simulated
//! gateway in production shape (artificial delay, always succeeds) and by
//! instant or failing gateways in tests.

use std::time::Duration;

use chrono::{DateTime, Utc};
use paperbound_core::{FulfillmentStatus, OrderId};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CheckoutConfig;
use crate::error::SubmissionError;
use crate::forms::{PaymentInfo, ShippingInfo};
use crate::summary::OrderSummary;

/// Human-facing order reference: a store code and a six-digit number.
///
/// The canonical order identity is the [`OrderId`] UUID; this reference
/// exists for receipts and support conversations and is not guaranteed
/// globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReference(String);

impl OrderReference {
    /// Generate a reference like `PB-483920`.
    #[must_use]
    pub fn generate(store_code: &str) -> Self {
        let number: u32 = rand::rng().random_range(100_000..=999_999);
        Self(format!("{store_code}-{number}"))
    }

    /// The reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receipt for a successfully placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub id: OrderId,
    pub reference: OrderReference,
    /// Always [`FulfillmentStatus::Received`] at placement; later statuses
    /// belong to the fulfillment collaborator.
    pub status: FulfillmentStatus,
    pub placed_at: DateTime<Utc>,
    pub summary: OrderSummary,
}

/// An order submission gateway.
#[allow(async_fn_in_trait)]
pub trait SubmitOrder {
    /// Submit the order.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] if the gateway declines or cannot be
    /// reached. The caller performs no side effects on failure.
    async fn submit(
        &self,
        shipping: &ShippingInfo,
        payment: &PaymentInfo,
        summary: &OrderSummary,
    ) -> Result<OrderConfirmation, SubmissionError>;
}

/// The storefront's simulated gateway: sleeps for the configured delay,
/// then accepts the order. There is no real payment processing behind it.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    store_code: String,
    delay: Duration,
}

impl SimulatedGateway {
    /// Create a gateway with an explicit store code and delay.
    #[must_use]
    pub fn new(store_code: impl Into<String>, delay: Duration) -> Self {
        Self {
            store_code: store_code.into(),
            delay,
        }
    }

    /// Create a gateway from checkout configuration.
    #[must_use]
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self::new(config.store_code.clone(), config.submission_delay)
    }

    /// Create a gateway that resolves immediately. Intended for tests and
    /// dry runs.
    #[must_use]
    pub fn instant(store_code: impl Into<String>) -> Self {
        Self::new(store_code, Duration::ZERO)
    }
}

impl SubmitOrder for SimulatedGateway {
    async fn submit(
        &self,
        _shipping: &ShippingInfo,
        _payment: &PaymentInfo,
        summary: &OrderSummary,
    ) -> Result<OrderConfirmation, SubmissionError> {
        tracing::debug!(delay_ms = self.delay.as_millis(), "simulating gateway call");
        tokio::time::sleep(self.delay).await;

        let confirmation = OrderConfirmation {
            id: OrderId::generate(),
            reference: OrderReference::generate(&self.store_code),
            status: FulfillmentStatus::Received,
            placed_at: Utc::now(),
            summary: summary.clone(),
        };
        tracing::info!(
            order = %confirmation.reference,
            total = %confirmation.summary.total,
            "order accepted"
        );
        Ok(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use paperbound_core::Price;

    fn summary() -> OrderSummary {
        OrderSummary {
            subtotal: Price::from_cents(5000),
            shipping: Price::from_cents(1599),
            tax: Price::from_cents(400),
            total: Price::from_cents(6999),
        }
    }

    #[test]
    fn test_reference_format() {
        let reference = OrderReference::generate("PB");
        let (prefix, number) = reference.as_str().split_once('-').unwrap();
        assert_eq!(prefix, "PB");
        assert_eq!(number.len(), 6);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_simulated_gateway_always_accepts() {
        let gateway = SimulatedGateway::instant("PB");
        let confirmation = gateway
            .submit(&ShippingInfo::default(), &PaymentInfo::default(), &summary())
            .await
            .unwrap();

        assert_eq!(confirmation.status, FulfillmentStatus::Received);
        assert_eq!(confirmation.summary, summary());
        assert!(confirmation.reference.as_str().starts_with("PB-"));
    }

    #[tokio::test]
    async fn test_order_ids_are_distinct() {
        let gateway = SimulatedGateway::instant("PB");
        let shipping = ShippingInfo::default();
        let payment = PaymentInfo::default();

        let first = gateway.submit(&shipping, &payment, &summary()).await.unwrap();
        let second = gateway.submit(&shipping, &payment, &summary()).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
