//! Static shipping catalog.
//!
//! The catalog is compiled-in configuration: exactly three flat-priced
//! delivery tiers, no admin configurability.

use std::sync::LazyLock;

use paperbound_core::Price;
use serde::Serialize;

/// Id of the default (free) shipping tier a new session starts with.
pub const DEFAULT_SHIPPING_OPTION: &str = "standard";

/// An immutable shipping catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingOption {
    pub id: &'static str,
    pub name: &'static str,
    /// Flat rate; zero means free.
    pub price: Price,
    pub description: &'static str,
}

static CATALOG: LazyLock<[ShippingOption; 3]> = LazyLock::new(|| {
    [
        ShippingOption {
            id: "standard",
            name: "Standard Shipping",
            price: Price::zero(),
            description: "Delivered in 5-7 business days",
        },
        ShippingOption {
            id: "express",
            name: "Express Shipping",
            price: Price::from_cents(1599),
            description: "Delivered in 2-3 business days",
        },
        ShippingOption {
            id: "same-day",
            name: "Same-Day Delivery",
            price: Price::from_cents(2999),
            description: "Delivered today for orders placed before 2pm",
        },
    ]
});

/// The full shipping catalog, in display order.
#[must_use]
pub fn shipping_options() -> &'static [ShippingOption] {
    &*CATALOG
}

/// Look up a catalog entry by id.
#[must_use]
pub fn find_shipping_option(id: &str) -> Option<&'static ShippingOption> {
    shipping_options().iter().find(|option| option.id == id)
}
