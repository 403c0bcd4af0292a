//! Order summary derivation.
//!
//! The summary is a pure projection of cart contents, the selected
//! shipping tier, and the tax rate. It has no identity and is never
//! cached - every render recomputes it, so a cart or shipping change can
//! never show a stale total.

use paperbound_core::Price;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::CartItem;
use crate::catalog::ShippingOption;

/// Derived subtotal/shipping/tax/total breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Compute the summary for the given cart lines and shipping
    /// selection.
    ///
    /// The subtotal is recomputed from line items rather than trusting a
    /// collaborator's running total. A `selected_id` that matches no
    /// catalog entry contributes zero shipping cost; rejecting unknown ids
    /// is the session's job, keeping this function total.
    #[must_use]
    pub fn compute(
        items: &[CartItem],
        catalog: &[ShippingOption],
        selected_id: &str,
        tax_rate: Decimal,
    ) -> Self {
        let subtotal: Price = items.iter().map(CartItem::line_total).sum();
        let shipping = catalog
            .iter()
            .find(|option| option.id == selected_id)
            .map_or_else(Price::zero, |option| option.price);
        let tax = subtotal.apply_rate(tax_rate);
        let total = subtotal + shipping + tax;

        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }
}
