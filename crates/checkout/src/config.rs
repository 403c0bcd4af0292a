//! Checkout configuration.
//!
//! Plain data injected at session construction. The core reads no
//! environment variables itself; binaries build this from whatever
//! configuration source they use.

use std::time::Duration;

use rust_decimal::Decimal;

/// Default storewide tax rate (8% of subtotal).
pub const DEFAULT_TAX_RATE_BPS: i64 = 800;

/// Default artificial gateway delay, matching the storefront's simulated
/// processing time.
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

/// Default ceiling on how long a submission may run before it is treated
/// as failed.
pub const DEFAULT_SUBMISSION_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunable parameters of a checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Fractional tax rate applied to the cart subtotal.
    pub tax_rate: Decimal,
    /// Store code prefixed to human-facing order references.
    pub store_code: String,
    /// Artificial delay of the simulated gateway.
    pub submission_delay: Duration,
    /// Ceiling on submission duration; `None` disables the timeout.
    pub submission_timeout: Option<Duration>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(DEFAULT_TAX_RATE_BPS, 4),
            store_code: "PB".to_owned(),
            submission_delay: DEFAULT_SUBMISSION_DELAY,
            submission_timeout: Some(DEFAULT_SUBMISSION_TIMEOUT),
        }
    }
}
