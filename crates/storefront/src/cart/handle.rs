//! Reactive cart view model.

use stylemate_core::{CartItem, Price, ProductId};

use super::CartStore;

type Subscriber = Box<dyn Fn(&[CartItem]) + Send>;

/// In-memory view of the cart with change notification.
///
/// The handle holds the last-known cart lines plus a readiness flag. It starts
/// unloaded; state read before [`load`](Self::load) runs is a loading
/// placeholder. After every mutation the handle reloads the full list from the
/// store instead of patching its copy, so the view always reflects exactly
/// what the store holds - at the cost of one redundant read per mutation.
///
/// Derived values (`total`, `item_count`) are folded from the current list on
/// each access and never stored, so they cannot drift from the lines.
pub struct CartHandle {
    store: CartStore,
    items: Vec<CartItem>,
    loaded: bool,
    subscribers: Vec<Subscriber>,
}

impl CartHandle {
    /// Create an unloaded handle over `store`.
    #[must_use]
    pub const fn new(store: CartStore) -> Self {
        Self {
            store,
            items: Vec::new(),
            loaded: false,
            subscribers: Vec::new(),
        }
    }

    /// Load the persisted cart into memory and mark the handle ready.
    pub fn load(&mut self) {
        self.items = self.store.items();
        self.loaded = true;
        self.notify();
    }

    /// Whether [`load`](Self::load) has completed.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The current in-memory cart lines.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Register a callback invoked with the current lines after every state
    /// change.
    pub fn subscribe(&mut self, subscriber: impl Fn(&[CartItem]) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Add a line and re-synchronize from the store.
    pub fn add_to_cart(&mut self, item: CartItem) {
        self.store.add_item(item);
        self.reload();
    }

    /// Remove the matching line(s) and re-synchronize from the store.
    pub fn remove_from_cart(&mut self, id: &ProductId, size: Option<&str>, color: Option<&str>) {
        self.store.remove_item(id, size, color);
        self.reload();
    }

    /// Update a line's quantity and re-synchronize from the store.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        self.store.update_quantity(id, quantity, size, color);
        self.reload();
    }

    /// Clear the store and reset local state.
    ///
    /// The result is known, so no reload round-trip is needed.
    pub fn clear_cart(&mut self) {
        self.store.clear();
        self.items.clear();
        self.notify();
    }

    /// Sum of `price x quantity` over the in-memory lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over the in-memory lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    fn reload(&mut self) {
        self.items = self.store.items();
        self.notify();
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.items);
        }
    }
}
