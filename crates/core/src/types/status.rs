//! Order fulfillment status.

use serde::{Deserialize, Serialize};

/// Fulfillment status of a placed order.
///
/// A new order starts as [`Received`](Self::Received). The remaining
/// statuses exist for display purposes only - the checkout core defines no
/// transition logic between them; fulfillment progression belongs to the
/// order-processing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentStatus {
    #[default]
    Received,
    Processing,
    InTransit,
    Delivered,
}

/// Error returned when parsing a [`FulfillmentStatus`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid fulfillment status: {0}")]
pub struct StatusParseError(String);

impl FulfillmentStatus {
    /// The full fulfillment sequence, in display order.
    pub const TIMELINE: [Self; 4] = [
        Self::Received,
        Self::Processing,
        Self::InTransit,
        Self::Delivered,
    ];

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Received => "Order received",
            Self::Processing => "Processing",
            Self::InTransit => "In transit",
            Self::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Received => write!(f, "received"),
            Self::Processing => write!(f, "processing"),
            Self::InTransit => write!(f, "in-transit"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for FulfillmentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "received" => Ok(Self::Received),
            "processing" => Ok(Self::Processing),
            "in-transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            _ => Err(StatusParseError(s.to_owned())),
        }
    }
}
