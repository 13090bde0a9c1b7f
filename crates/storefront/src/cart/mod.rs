//! Persistent cart store.
//!
//! The whole cart lives as one JSON-encoded array of cart lines under a fixed
//! storage key. Every operation re-reads that value, mutates the in-memory
//! list, and writes the whole value back; there is no caching layer. The
//! read-modify-write sequence is not atomic across execution contexts, so two
//! writers sharing the same key can lose updates (last write wins) - an
//! accepted limitation of the single-context usage model, not a guarantee.

mod handle;

pub use handle::CartHandle;

use std::sync::Arc;

use stylemate_core::{CartItem, Price, ProductId};

use crate::storage::StorageBackend;

/// Storage key holding the serialized cart.
pub const CART_KEY: &str = "stylemate_cart";

/// Cart persistence over an injectable storage backend.
///
/// Reads degrade to an empty cart when the backend is unavailable, the key is
/// absent, or the stored value fails to parse. Write failures are logged and
/// swallowed; the caller proceeds as if the write succeeded, accepting the
/// inconsistency risk.
#[derive(Clone)]
pub struct CartStore {
    backend: Arc<dyn StorageBackend>,
}

impl CartStore {
    /// Create a store over `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Load the current cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        match self.backend.get(CART_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::debug!("discarding malformed cart value: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::debug!("cart read degraded to empty: {e}");
                Vec::new()
            }
        }
    }

    /// Replace the persisted cart with `items`.
    pub fn set_items(&self, items: &[CartItem]) {
        match serde_json::to_string(items) {
            Ok(raw) => {
                if let Err(e) = self.backend.set(CART_KEY, &raw) {
                    tracing::error!("failed to save cart: {e}");
                }
            }
            Err(e) => tracing::error!("failed to serialize cart: {e}"),
        }
    }

    /// Add `item` to the cart.
    ///
    /// If a line with the same composite key already exists, its quantity is
    /// incremented by `item.quantity`; otherwise `item` is appended as a new
    /// line. Either way the cart is persisted exactly once.
    pub fn add_item(&self, item: CartItem) {
        let mut items = self.items();
        if let Some(existing) = items.iter_mut().find(|line| line.same_variant(&item)) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            items.push(item);
        }
        self.set_items(&items);
    }

    /// Remove every line whose composite key matches `(id, size, color)`
    /// exactly.
    ///
    /// An absent size or color only matches a line with the same absence, so a
    /// call specifying a size never removes a line that has none.
    pub fn remove_item(&self, id: &ProductId, size: Option<&str>, color: Option<&str>) {
        let mut items = self.items();
        items.retain(|line| !line.matches_variant(id, size, color));
        self.set_items(&items);
    }

    /// Set the quantity of the line matching `(id, size, color)`.
    ///
    /// A quantity of 0 removes the line. When no line matches, nothing is
    /// persisted.
    pub fn update_quantity(
        &self,
        id: &ProductId,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        let mut items = self.items();
        let Some(index) = items
            .iter()
            .position(|line| line.matches_variant(id, size, color))
        else {
            return;
        };

        if quantity == 0 {
            self.remove_item(id, size, color);
            return;
        }

        if let Some(line) = items.get_mut(index) {
            line.quantity = quantity;
        }
        self.set_items(&items);
    }

    /// Persist an empty cart.
    pub fn clear(&self) {
        self.set_items(&[]);
    }

    /// Sum of `price x quantity` over a fresh read of the cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items().iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over a fresh read of the cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items().iter().map(|line| line.quantity).sum()
    }
}
