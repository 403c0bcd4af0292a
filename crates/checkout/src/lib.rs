//! Paperbound Checkout - the storefront's checkout wizard core.
//!
//! A four-stage linear wizard (shipping -> payment -> review ->
//! confirmation) that gates forward progress on form completeness,
//! derives the order total from cart contents plus the selected shipping
//! tier plus the tax rate, and places the order through a submission
//! gateway.
//!
//! # Architecture
//!
//! The crate is pure domain logic: no HTTP, no database, no templates.
//! The two collaborators that cross its boundary - the cart and the
//! submission gateway - are injected at session construction behind the
//! [`Cart`] and [`SubmitOrder`] traits.
//!
//! ```
//! use paperbound_checkout::{
//!     CheckoutConfig, CheckoutSession, InMemoryCart, SimulatedGateway,
//! };
//! # use paperbound_checkout::{BookSnapshot, CartItem};
//! # use paperbound_core::Price;
//!
//! # let cart = InMemoryCart::new(vec![CartItem {
//! #     book: BookSnapshot {
//! #         title: "Example".into(),
//! #         author: "Example".into(),
//! #         price: Price::from_cents(1000),
//! #         cover_image: None,
//! #     },
//! #     quantity: 1,
//! # }]);
//! let config = CheckoutConfig::default();
//! let gateway = SimulatedGateway::from_config(&config);
//! let session = CheckoutSession::new(cart, gateway, config)?;
//! assert!(!session.is_shipping_complete());
//! # Ok::<(), paperbound_checkout::CheckoutError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod session;
pub mod stage;
pub mod submit;
pub mod summary;

pub use cart::{BookSnapshot, Cart, CartItem, InMemoryCart};
pub use catalog::{DEFAULT_SHIPPING_OPTION, ShippingOption, find_shipping_option, shipping_options};
pub use config::CheckoutConfig;
pub use error::{CheckoutError, SubmissionError};
pub use forms::{
    FormField, PaymentInfo, PaymentMethod, PaymentUpdate, ShippingInfo, ShippingUpdate,
};
pub use session::{CheckoutSession, SubmissionState};
pub use stage::CheckoutStage;
pub use submit::{OrderConfirmation, OrderReference, SimulatedGateway, SubmitOrder};
pub use summary::OrderSummary;
