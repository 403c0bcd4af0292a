//! JSON fixture loading for carts and checkout details.
//!
//! A cart fixture is a JSON array of cart lines; a details fixture holds
//! the shipping and payment forms the simulation will type in. Prices are
//! decimal strings (e.g. `"12.99"`), never floats.

use std::path::Path;

use paperbound_checkout::{
    CartItem, InMemoryCart, PaymentMethod, PaymentUpdate, ShippingUpdate,
};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Checkout details fixture: what the simulation types into the forms.
#[derive(Debug, Deserialize)]
pub struct CheckoutDetails {
    pub shipping: ShippingDetails,
    #[serde(default)]
    pub payment: PaymentDetails,
}

/// Shipping form contents.
#[derive(Debug, Deserialize)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub address_complement: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub save_info: bool,
}

/// Payment form contents. Defaults to an empty credit-card form.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentDetails {
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(default)]
    pub cardholder_name: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub save_payment: bool,
}

impl ShippingDetails {
    /// The form updates this fixture types in, in field order.
    #[must_use]
    pub fn updates(self) -> Vec<ShippingUpdate> {
        let mut updates = vec![
            ShippingUpdate::FirstName(self.first_name),
            ShippingUpdate::LastName(self.last_name),
            ShippingUpdate::Email(self.email),
            ShippingUpdate::Phone(self.phone),
            ShippingUpdate::Address(self.address),
            ShippingUpdate::AddressComplement(self.address_complement),
            ShippingUpdate::City(self.city),
            ShippingUpdate::State(self.state),
            ShippingUpdate::ZipCode(self.zip_code),
            ShippingUpdate::SaveInfo(self.save_info),
        ];
        if let Some(country) = self.country {
            updates.push(ShippingUpdate::Country(country));
        }
        updates
    }
}

impl PaymentDetails {
    /// The form updates this fixture types in, in field order.
    #[must_use]
    pub fn updates(self) -> Vec<PaymentUpdate> {
        vec![
            PaymentUpdate::CardholderName(self.cardholder_name),
            PaymentUpdate::CardNumber(self.card_number),
            PaymentUpdate::ExpiryDate(self.expiry_date),
            PaymentUpdate::Cvv(self.cvv),
            PaymentUpdate::SavePayment(self.save_payment),
        ]
    }
}

/// Load a cart fixture into an in-memory cart.
///
/// # Errors
///
/// Returns `FixtureError` if the file cannot be read or parsed.
pub fn load_cart(path: &Path) -> Result<InMemoryCart, FixtureError> {
    let lines: Vec<CartItem> = load_json(path)?;
    Ok(InMemoryCart::new(lines))
}

/// Load a checkout details fixture.
///
/// # Errors
///
/// Returns `FixtureError` if the file cannot be read or parsed.
pub fn load_details(path: &Path) -> Result<CheckoutDetails, FixtureError> {
    load_json(path)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_fixture_parses() {
        let raw = r#"[
            {
                "book": {
                    "title": "The Midnight Shelf",
                    "author": "R. Binder",
                    "price": { "amount": "18.50" }
                },
                "quantity": 2
            }
        ]"#;
        let lines: Vec<CartItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(lines.len(), 1);
        let first = lines.first().unwrap();
        assert_eq!(first.quantity, 2);
        assert_eq!(first.book.cover_image, None);
    }

    #[test]
    fn test_details_fixture_defaults_payment() {
        let raw = r#"{
            "shipping": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100",
                "address": "12 Analytical Row",
                "city": "London",
                "state": "LDN",
                "zip_code": "N1 9GU"
            }
        }"#;
        let details: CheckoutDetails = serde_json::from_str(raw).unwrap();
        assert_eq!(details.payment.method, PaymentMethod::CreditCard);
        assert!(!details.shipping.save_info);
        assert_eq!(details.shipping.updates().len(), 10);
    }
}
