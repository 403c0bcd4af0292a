//! CLI configuration loaded from environment variables.
//!
//! The checkout core takes its parameters as plain data; this module is
//! where the binary maps environment variables onto [`CheckoutConfig`].
//!
//! # Environment Variables
//!
//! All optional; defaults match the storefront's compiled-in values.
//!
//! - `PAPERBOUND_TAX_RATE` - Fractional tax rate, e.g. `0.08`
//! - `PAPERBOUND_STORE_CODE` - Prefix for order references, e.g. `PB`
//! - `PAPERBOUND_SUBMIT_DELAY_MS` - Simulated gateway delay in
//!   milliseconds
//! - `PAPERBOUND_SUBMIT_TIMEOUT_MS` - Submission timeout in milliseconds;
//!   `0` disables the timeout

use std::time::Duration;

use paperbound_checkout::CheckoutConfig;
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Load checkout configuration from the environment.
///
/// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse.
pub fn from_env() -> Result<CheckoutConfig, ConfigError> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let mut config = CheckoutConfig::default();

    if let Some(raw) = get_optional_env("PAPERBOUND_TAX_RATE") {
        config.tax_rate = parse_tax_rate(&raw)?;
    }
    if let Some(store_code) = get_optional_env("PAPERBOUND_STORE_CODE") {
        config.store_code = store_code;
    }
    if let Some(raw) = get_optional_env("PAPERBOUND_SUBMIT_DELAY_MS") {
        config.submission_delay = parse_millis("PAPERBOUND_SUBMIT_DELAY_MS", &raw)?;
    }
    if let Some(raw) = get_optional_env("PAPERBOUND_SUBMIT_TIMEOUT_MS") {
        let timeout = parse_millis("PAPERBOUND_SUBMIT_TIMEOUT_MS", &raw)?;
        config.submission_timeout = if timeout.is_zero() {
            None
        } else {
            Some(timeout)
        };
    }

    Ok(config)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse a fractional tax rate such as `0.08`.
fn parse_tax_rate(raw: &str) -> Result<Decimal, ConfigError> {
    let rate: Decimal = raw
        .parse()
        .map_err(|e: rust_decimal::Error| {
            ConfigError::InvalidEnvVar("PAPERBOUND_TAX_RATE", e.to_string())
        })?;
    if rate.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            "PAPERBOUND_TAX_RATE",
            "must not be negative".to_owned(),
        ));
    }
    Ok(rate)
}

/// Parse a millisecond duration value.
fn parse_millis(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key, e.to_string()))
}
