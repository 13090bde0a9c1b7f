//! Checkout flow.
//!
//! Orders are synthesized client-side: there is no payment capture and no
//! server-side order system. A successful checkout validates the customer
//! info, snapshots the cart into an [`Order`], hands the snapshot to the
//! [`OrderSession`] for the confirmation view, and clears the cart. There is
//! no retry and no idempotency guard; double-submit protection is a concern
//! of the caller's submit path.

use chrono::{DateTime, Utc};
use thiserror::Error;

use stylemate_core::{CustomerInfo, CustomerInfoError, Order};

use crate::cart::CartHandle;
use crate::session::OrderSession;

/// Errors that abort checkout. No state is mutated when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart view has not finished loading.
    #[error("cart is still loading")]
    NotLoaded,

    /// Checkout requires at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// A required customer field is blank.
    #[error(transparent)]
    InvalidCustomer(#[from] CustomerInfoError),
}

/// Place an order from the current cart.
///
/// On success the order snapshot has been stored in `session` under the
/// last-order key, the cart has been cleared, and the returned [`Order`]
/// carries the confirmation number for the redirect to the confirmation view.
///
/// # Errors
///
/// Returns a [`CheckoutError`] when the cart is unloaded or empty, or when a
/// required customer field is blank. Validation failures leave the cart and
/// the session untouched.
pub fn place_order(
    cart: &mut CartHandle,
    session: &OrderSession,
    customer: CustomerInfo,
) -> Result<Order, CheckoutError> {
    if !cart.is_loaded() {
        return Err(CheckoutError::NotLoaded);
    }
    if cart.items().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    customer.validate()?;

    let now = Utc::now();
    let order = Order {
        confirmation_number: confirmation_number(now),
        customer_info: customer,
        items: cart.items().to_vec(),
        total: cart.total(),
        date: now,
    };

    session.store(&order);
    cart.clear_cart();

    Ok(order)
}

/// `SM-` followed by the last eight digits of the epoch-millisecond timestamp.
fn confirmation_number(at: DateTime<Utc>) -> String {
    let digits = at.timestamp_millis().to_string();
    let start = digits.len().saturating_sub(8);
    let tail = digits.get(start..).unwrap_or(&digits);
    format!("SM-{tail}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use stylemate_core::{CartItem, Price, Product, ProductId};

    use super::*;
    use crate::cart::CartStore;
    use crate::storage::MemoryBackend;

    fn loaded_cart_with(items: &[CartItem]) -> CartHandle {
        let store = CartStore::new(Arc::new(MemoryBackend::new()));
        store.set_items(items);
        let mut handle = CartHandle::new(store);
        handle.load();
        handle
    }

    fn line(id: &str, cents: i64, quantity: u32) -> CartItem {
        CartItem::new(
            Product {
                id: ProductId::new(id),
                name: id.to_owned(),
                category: "Shirts".to_owned(),
                price: Price::from_cents(cents),
                description: String::new(),
                image: format!("/images/{id}.jpg"),
                sizes: None,
                colors: None,
            },
            quantity,
        )
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "555-0100".to_owned(),
            address: "1 Analytical Way".to_owned(),
            ..CustomerInfo::default()
        }
    }

    fn session() -> OrderSession {
        OrderSession::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_confirmation_number_shape() {
        let number = confirmation_number("2026-01-02T03:04:05Z".parse().unwrap());
        assert!(number.starts_with("SM-"));
        assert_eq!(number.len(), "SM-".len() + 8);
        assert!(number.chars().skip(3).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_successful_checkout() {
        let mut cart = loaded_cart_with(&[line("a", 1000, 3)]);
        let session = session();

        let order = place_order(&mut cart, &session, customer()).unwrap();

        assert_eq!(order.total, Price::from_cents(3000));
        assert_eq!(order.items.len(), 1);
        // Cart is destroyed on success; the snapshot is handed to the session.
        assert!(cart.items().is_empty());
        assert_eq!(
            session.last_order().unwrap().confirmation_number,
            order.confirmation_number
        );
    }

    #[test]
    fn test_missing_field_aborts_without_mutation() {
        let mut cart = loaded_cart_with(&[line("a", 1000, 1)]);
        let session = session();

        let mut incomplete = customer();
        incomplete.phone = String::new();

        let err = place_order(&mut cart, &session, incomplete).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InvalidCustomer(CustomerInfoError::MissingField("phone"))
        );
        assert_eq!(cart.items().len(), 1);
        assert!(session.last_order().is_none());
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut cart = loaded_cart_with(&[]);
        assert_eq!(
            place_order(&mut cart, &session(), customer()).unwrap_err(),
            CheckoutError::EmptyCart
        );
    }

    #[test]
    fn test_unloaded_cart_is_rejected() {
        let mut cart = CartHandle::new(CartStore::new(Arc::new(MemoryBackend::new())));
        assert_eq!(
            place_order(&mut cart, &session(), customer()).unwrap_err(),
            CheckoutError::NotLoaded
        );
    }
}
