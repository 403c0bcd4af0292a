//! Type-safe price representation using decimal arithmetic.
//!
//! Monetary values never touch floating point: amounts are
//! [`rust_decimal::Decimal`] throughout, so `50.00 * 0.08` is exactly
//! `4.00` and line totals never accumulate binary rounding error.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Arithmetic is only defined between prices of the same currency; the
/// store operates in a single currency, so mixed-currency sums indicate a
/// construction bug upstream and are caught by a debug assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code: CurrencyCode::default(),
        }
    }

    /// The zero price in the default currency.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code: CurrencyCode::default(),
        }
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Multiply a unit price by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }

    /// Apply a fractional rate (e.g., a `0.08` tax rate) to this price.
    ///
    /// The result keeps the full decimal precision; rounding happens only
    /// at display time.
    #[must_use]
    pub fn apply_rate(&self, rate: Decimal) -> Self {
        Self {
            amount: self.amount * rate,
            currency_code: self.currency_code,
        }
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        Self {
            amount: self.amount + rhs.amount,
            currency_code: self.currency_code,
        }
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        self.amount += rhs.amount;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 alphabetic code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1599);
        assert_eq!(price.amount, Decimal::new(1599, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_times_quantity() {
        let unit = Price::from_cents(1299);
        assert_eq!(unit.times(3), Price::from_cents(3897));
    }

    #[test]
    fn test_apply_rate_is_exact() {
        // 50.00 * 0.08 = 4.00, exactly - no binary float drift
        let subtotal = Price::from_cents(5000);
        let tax = subtotal.apply_rate(Decimal::new(8, 2));
        assert_eq!(tax, Price::from_cents(400));
    }

    #[test]
    fn test_sum_of_line_totals() {
        let total: Price = [Price::from_cents(1000), Price::from_cents(599)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(1599));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(1599).display(), "$15.99");
        assert_eq!(Price::zero().display(), "$0.00");
        assert_eq!(
            Price::new(Decimal::new(4, 0), CurrencyCode::USD).display(),
            "$4.00"
        );
    }

    #[test]
    fn test_serde_amount_as_string() {
        let price = Price::from_cents(1599);
        let json = serde_json::to_string(&price).unwrap();
        assert!(json.contains("\"15.99\""));

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
