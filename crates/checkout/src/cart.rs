//! Cart boundary.
//!
//! The cart is owned by a collaborator outside the checkout core. The core
//! holds a handle injected at session construction, reads items and total
//! through it, and calls [`Cart::clear`] exactly once - after a successful
//! order submission, never before.

use std::sync::{Arc, Mutex, PoisonError};

use paperbound_core::Price;
use serde::{Deserialize, Serialize};

/// Frozen copy of a book's catalog data at the time it was added to the
/// cart, so the line displays consistently even if the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub title: String,
    pub author: String,
    pub price: Price,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// One cart line: a book snapshot and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub book: BookSnapshot,
    pub quantity: u32,
}

impl CartItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.book.price.times(self.quantity)
    }
}

/// The cart collaborator interface the checkout core needs.
///
/// Implementations own storage and lifecycle; the core only reads and,
/// on a placed order, clears.
pub trait Cart {
    /// Snapshot of the current cart lines.
    fn items(&self) -> Vec<CartItem>;

    /// The collaborator's own running total.
    fn total(&self) -> Price;

    /// Remove every line. Called once per placed order.
    fn clear(&mut self);

    /// Whether the cart has no lines.
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// In-process [`Cart`] implementation backed by shared memory.
///
/// Clones share the same underlying cart, which lets the caller keep a
/// handle for itself while handing another to the checkout session - the
/// same shape as a cart context living outside the wizard.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCart {
    lines: Arc<Mutex<Vec<CartItem>>>,
}

impl InMemoryCart {
    /// Create a cart holding the given lines.
    #[must_use]
    pub fn new(lines: Vec<CartItem>) -> Self {
        Self {
            lines: Arc::new(Mutex::new(lines)),
        }
    }

    /// Append a line to the cart.
    pub fn add(&self, item: CartItem) {
        self.lock().push(item);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CartItem>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Cart for InMemoryCart {
    fn items(&self) -> Vec<CartItem> {
        self.lock().clone()
    }

    fn total(&self) -> Price {
        self.lock().iter().map(CartItem::line_total).sum()
    }

    fn clear(&mut self) {
        self.lock().clear();
    }
}
