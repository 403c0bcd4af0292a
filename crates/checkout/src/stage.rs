//! Checkout wizard stages.

use serde::{Deserialize, Serialize};

/// One discrete step of the checkout wizard.
///
/// Stages form a strict forward order: `Shipping -> Payment -> Review ->
/// Confirmation`. [`Confirmation`](Self::Confirmation) is terminal - no
/// forward or backward transition is defined from it, and it is only
/// reachable through a successful order submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutStage {
    #[default]
    Shipping,
    Payment,
    Review,
    Confirmation,
}

impl CheckoutStage {
    /// The stage reached by a successful forward transition, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Shipping => Some(Self::Payment),
            Self::Payment => Some(Self::Review),
            Self::Review => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    /// The stage reached by a backward transition, if any.
    ///
    /// Backward navigation is only defined between the form stages;
    /// `Shipping` is the floor and `Confirmation` never goes back.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Payment => Some(Self::Shipping),
            Self::Review => Some(Self::Payment),
            Self::Shipping | Self::Confirmation => None,
        }
    }

    /// Whether this stage is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmation)
    }
}

impl std::fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shipping => write!(f, "shipping"),
            Self::Payment => write!(f, "payment"),
            Self::Review => write!(f, "review"),
            Self::Confirmation => write!(f, "confirmation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_order_never_skips() {
        assert_eq!(CheckoutStage::Shipping.next(), Some(CheckoutStage::Payment));
        assert_eq!(CheckoutStage::Payment.next(), Some(CheckoutStage::Review));
        assert_eq!(
            CheckoutStage::Review.next(),
            Some(CheckoutStage::Confirmation)
        );
        assert_eq!(CheckoutStage::Confirmation.next(), None);
    }

    #[test]
    fn test_backward_floor_and_terminal() {
        assert_eq!(CheckoutStage::Shipping.previous(), None);
        assert_eq!(CheckoutStage::Confirmation.previous(), None);
        assert_eq!(
            CheckoutStage::Review.previous(),
            Some(CheckoutStage::Payment)
        );
    }

    #[test]
    fn test_terminal() {
        assert!(CheckoutStage::Confirmation.is_terminal());
        assert!(!CheckoutStage::Review.is_terminal());
    }
}
