//! Compute an order summary for a cart fixture.

use std::path::Path;

use paperbound_checkout::{
    Cart, CheckoutConfig, OrderSummary, find_shipping_option, shipping_options,
};
use thiserror::Error;

use crate::fixtures::{self, FixtureError};

/// Errors that can occur while quoting a cart.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Cart fixture could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The requested shipping option is not in the catalog.
    #[error("unknown shipping option: {0}")]
    UnknownShippingOption(String),
}

/// Price a cart fixture and print the summary breakdown.
///
/// # Errors
///
/// Returns `QuoteError` if the fixture fails to load or the shipping id
/// is not in the catalog.
pub fn run(cart_path: &Path, shipping_id: &str, config: &CheckoutConfig) -> Result<(), QuoteError> {
    let option = find_shipping_option(shipping_id)
        .ok_or_else(|| QuoteError::UnknownShippingOption(shipping_id.to_owned()))?;

    let cart = fixtures::load_cart(cart_path)?;
    let items = cart.items();
    tracing::info!(lines = items.len(), shipping = option.id, "quoting cart");

    let summary = OrderSummary::compute(&items, shipping_options(), shipping_id, config.tax_rate);
    print_summary(&summary, option.name);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_summary(summary: &OrderSummary, shipping_name: &str) {
    println!("Subtotal              {:>10}", summary.subtotal.display());
    println!(
        "Shipping ({shipping_name:<12}) {:>8}",
        summary.shipping.display()
    );
    println!("Tax                   {:>10}", summary.tax.display());
    println!("Total                 {:>10}", summary.total.display());
}
