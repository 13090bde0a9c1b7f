//! StyleMate storefront state engine.
//!
//! The storefront keeps all shopper state client-side: the cart is persisted
//! as one JSON blob in a key-value store, checkout synthesizes an order
//! snapshot into a session-scoped store, and the product catalog is a static
//! asset consumed read-only.
//!
//! # Modules
//!
//! - [`storage`] - Injectable key-value backends (in-memory and file-backed)
//! - [`cart`] - The persistent cart store and the reactive cart handle
//! - [`checkout`] - Order placement
//! - [`session`] - Transient order handoff to the confirmation view
//! - [`catalog`] - The built-in product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;
pub mod storage;

pub use cart::{CART_KEY, CartHandle, CartStore};
pub use checkout::{CheckoutError, place_order};
pub use session::{LAST_ORDER_KEY, OrderSession};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
