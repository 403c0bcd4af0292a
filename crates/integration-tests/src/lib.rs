//! Integration tests for Paperbound.
//!
//! The tests under `tests/` drive the public API of `paperbound-checkout`
//! end-to-end: cart in, wizard stages, simulated submission, confirmation
//! out. This library holds the shared fixtures and the instrumented
//! collaborator doubles they use.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paperbound-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use paperbound_checkout::{
    BookSnapshot, Cart, CartItem, CheckoutConfig, InMemoryCart, OrderConfirmation, OrderSummary,
    PaymentInfo, ShippingInfo, ShippingUpdate, SimulatedGateway, SubmissionError, SubmitOrder,
};
use paperbound_core::Price;

/// A book snapshot fixture.
#[must_use]
pub fn book(title: &str, cents: i64) -> BookSnapshot {
    BookSnapshot {
        title: title.to_owned(),
        author: "Fixture Author".to_owned(),
        price: Price::from_cents(cents),
        cover_image: None,
    }
}

/// A cart holding one line per `(unit price in cents, quantity)` pair.
#[must_use]
pub fn cart_with(lines: &[(i64, u32)]) -> InMemoryCart {
    InMemoryCart::new(
        lines
            .iter()
            .enumerate()
            .map(|(i, &(cents, quantity))| CartItem {
                book: book(&format!("Fixture Volume {}", i + 1), cents),
                quantity,
            })
            .collect(),
    )
}

/// Checkout configuration with an instant gateway, for tests.
#[must_use]
pub fn instant_config() -> CheckoutConfig {
    CheckoutConfig {
        submission_delay: std::time::Duration::ZERO,
        ..CheckoutConfig::default()
    }
}

/// The eight required shipping fields, fully filled.
#[must_use]
pub fn complete_shipping_updates() -> Vec<ShippingUpdate> {
    vec![
        ShippingUpdate::FirstName("Ada".to_owned()),
        ShippingUpdate::LastName("Lovelace".to_owned()),
        ShippingUpdate::Email("ada@example.com".to_owned()),
        ShippingUpdate::Phone("555-0100".to_owned()),
        ShippingUpdate::Address("12 Analytical Row".to_owned()),
        ShippingUpdate::City("London".to_owned()),
        ShippingUpdate::State("LDN".to_owned()),
        ShippingUpdate::ZipCode("N1 9GU".to_owned()),
    ]
}

/// Cart double that counts how often it is cleared.
#[derive(Debug, Clone)]
pub struct CountingCart {
    inner: InMemoryCart,
    clears: Arc<AtomicUsize>,
}

impl CountingCart {
    #[must_use]
    pub fn new(inner: InMemoryCart) -> Self {
        Self {
            inner,
            clears: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `clear()` has been called, across all clones.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl Cart for CountingCart {
    fn items(&self) -> Vec<CartItem> {
        self.inner.items()
    }

    fn total(&self) -> Price {
        self.inner.total()
    }

    fn clear(&mut self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear();
    }
}

/// Gateway double that fails a fixed number of times before delegating to
/// the simulated gateway. Exercises the retry-from-review path.
#[derive(Debug)]
pub struct FlakyGateway {
    inner: SimulatedGateway,
    failures_left: AtomicUsize,
}

impl FlakyGateway {
    #[must_use]
    pub fn failing_times(failures: usize) -> Self {
        Self {
            inner: SimulatedGateway::instant("PB"),
            failures_left: AtomicUsize::new(failures),
        }
    }
}

impl SubmitOrder for FlakyGateway {
    async fn submit(
        &self,
        shipping: &ShippingInfo,
        payment: &PaymentInfo,
        summary: &OrderSummary,
    ) -> Result<OrderConfirmation, SubmissionError> {
        let remaining = self.failures_left.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_left.store(remaining - 1, Ordering::SeqCst);
            return Err(SubmissionError::Unavailable(
                "gateway connection reset".to_owned(),
            ));
        }
        self.inner.submit(shipping, payment, summary).await
    }
}
