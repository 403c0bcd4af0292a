//! Checkout error taxonomy.
//!
//! Every error here is local to one checkout session; none is fatal to
//! the surrounding application. A guard refusal keeps the session on its
//! current stage, and a failed submission leaves it in review with the
//! cart untouched.

use std::time::Duration;

use thiserror::Error;

use crate::forms::FormField;
use crate::stage::CheckoutStage;

/// Errors surfaced by the checkout session.
#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    /// A required field was still empty when `advance()` was attempted.
    ///
    /// Carries the specific missing fields so the UI layer can highlight
    /// them instead of only disabling the advance control.
    #[error("{stage} form incomplete: missing {}", join_fields(.missing))]
    ValidationIncomplete {
        stage: CheckoutStage,
        missing: Vec<FormField>,
    },

    /// The cart emptied out from under an active wizard stage; the caller
    /// is expected to redirect back to the cart page.
    #[error("cart is empty")]
    EmptyCart,

    /// The selected shipping id matches no catalog entry.
    #[error("unknown shipping option: {0}")]
    UnknownShippingOption(String),

    /// An order submission is already in flight for this session.
    #[error("order submission already in flight")]
    SubmissionInFlight,

    /// Order submission failed; the session stays in review and the cart
    /// is untouched, so the user can retry.
    #[error("order submission failed: {0}")]
    Submission(#[from] SubmissionError),
}

/// Errors produced by an order submission gateway.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    /// The gateway rejected the order.
    #[error("order declined: {0}")]
    Declined(String),

    /// The gateway could not be reached.
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    /// The submission exceeded the configured timeout.
    #[error("submission timed out after {0:?}")]
    TimedOut(Duration),
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_incomplete_names_fields() {
        let err = CheckoutError::ValidationIncomplete {
            stage: CheckoutStage::Shipping,
            missing: vec![FormField::Email, FormField::ZipCode],
        };
        assert_eq!(
            err.to_string(),
            "shipping form incomplete: missing email, zip_code"
        );
    }

    #[test]
    fn test_submission_error_wraps() {
        let err: CheckoutError = SubmissionError::Declined("insufficient funds".into()).into();
        assert!(matches!(err, CheckoutError::Submission(_)));
    }
}
