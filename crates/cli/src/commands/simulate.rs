//! Drive the full checkout wizard against the simulated gateway.

use std::path::Path;

use paperbound_checkout::{
    CheckoutConfig, CheckoutError, CheckoutSession, OrderConfirmation, SimulatedGateway,
};
use paperbound_core::FulfillmentStatus;
use thiserror::Error;

use crate::fixtures::{self, FixtureError};

/// Errors that can occur during a simulated checkout run.
#[derive(Debug, Error)]
pub enum SimulateError {
    /// A fixture could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The wizard refused a transition or the submission failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Run a cart and details fixture through every wizard stage and print
/// the confirmation.
///
/// # Errors
///
/// Returns `SimulateError` if a fixture fails to load, a stage guard
/// refuses (e.g. the details fixture leaves a required field empty), or
/// the submission fails.
pub async fn run(
    cart_path: &Path,
    details_path: &Path,
    shipping_id: &str,
    config: CheckoutConfig,
) -> Result<(), SimulateError> {
    let cart = fixtures::load_cart(cart_path)?;
    let details = fixtures::load_details(details_path)?;

    let gateway = SimulatedGateway::from_config(&config);
    let mut session = CheckoutSession::new(cart, gateway, config)?;
    session.select_shipping_option(shipping_id)?;

    for update in details.shipping.updates() {
        session.update_shipping(update);
    }
    session.select_payment_method(details.payment.method);
    for update in details.payment.updates() {
        session.update_payment(update);
    }

    // Shipping -> payment -> review, then submit from review
    tracing::info!(session = %session.id(), "walking wizard stages");
    session.advance().await?;
    session.advance().await?;
    let summary = session.summary();
    tracing::info!(total = %summary.total, "submitting order");
    session.advance().await?;

    if let Some(confirmation) = session.confirmation() {
        print_confirmation(confirmation);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_confirmation(confirmation: &OrderConfirmation) {
    println!("Order placed: {}", confirmation.reference);
    println!("Order id:     {}", confirmation.id);
    println!("Placed at:    {}", confirmation.placed_at.to_rfc3339());
    println!("Total:        {}", confirmation.summary.total.display());
    println!();
    for status in FulfillmentStatus::TIMELINE {
        let marker = if status == confirmation.status {
            '>'
        } else {
            ' '
        };
        println!(" {marker} {}", status.label());
    }
}
