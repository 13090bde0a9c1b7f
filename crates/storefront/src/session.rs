//! Transient order handoff.
//!
//! Checkout stores exactly one order snapshot for the confirmation view to
//! read. The backing store is session-scoped (a [`MemoryBackend`] in
//! practice), so the snapshot lives until the session ends; reading it does
//! not clear it.
//!
//! [`MemoryBackend`]: crate::storage::MemoryBackend

use std::sync::Arc;

use stylemate_core::Order;

use crate::storage::StorageBackend;

/// Storage key holding the last placed order.
pub const LAST_ORDER_KEY: &str = "lastOrder";

/// Session-scoped store for the most recent order snapshot.
#[derive(Clone)]
pub struct OrderSession {
    backend: Arc<dyn StorageBackend>,
}

impl OrderSession {
    /// Create a session over `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store `order` as the last placed order, replacing any prior snapshot.
    ///
    /// Write failures are logged and swallowed; the checkout flow proceeds
    /// regardless.
    pub fn store(&self, order: &Order) {
        match serde_json::to_string(order) {
            Ok(raw) => {
                if let Err(e) = self.backend.set(LAST_ORDER_KEY, &raw) {
                    tracing::error!("failed to save order snapshot: {e}");
                }
            }
            Err(e) => tracing::error!("failed to serialize order snapshot: {e}"),
        }
    }

    /// The last placed order, if a readable snapshot exists.
    #[must_use]
    pub fn last_order(&self) -> Option<Order> {
        match self.backend.get(LAST_ORDER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(order) => Some(order),
                Err(e) => {
                    tracing::debug!("discarding malformed order snapshot: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("order snapshot read degraded to none: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stylemate_core::{CustomerInfo, Price};

    use super::*;
    use crate::storage::{MemoryBackend, StorageBackend};

    fn order(confirmation: &str) -> Order {
        Order {
            confirmation_number: confirmation.to_owned(),
            customer_info: CustomerInfo::default(),
            items: Vec::new(),
            total: Price::ZERO,
            date: "2026-01-02T03:04:05Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_reading_does_not_clear() {
        let session = OrderSession::new(Arc::new(MemoryBackend::new()));
        session.store(&order("SM-00000001"));

        assert_eq!(
            session.last_order().unwrap().confirmation_number,
            "SM-00000001"
        );
        // Still there on a second read.
        assert!(session.last_order().is_some());
    }

    #[test]
    fn test_store_replaces_prior_snapshot() {
        let session = OrderSession::new(Arc::new(MemoryBackend::new()));
        session.store(&order("SM-00000001"));
        session.store(&order("SM-00000002"));

        assert_eq!(
            session.last_order().unwrap().confirmation_number,
            "SM-00000002"
        );
    }

    #[test]
    fn test_missing_or_malformed_reads_as_none() {
        let backend = Arc::new(MemoryBackend::new());
        let session = OrderSession::new(backend.clone());
        assert!(session.last_order().is_none());

        backend.set(LAST_ORDER_KEY, "{not json").unwrap();
        assert!(session.last_order().is_none());
    }
}
