//! Shared type definitions.

mod cart;
mod id;
mod order;
mod price;
mod product;

pub use cart::CartItem;
pub use id::ProductId;
pub use order::{CustomerInfo, CustomerInfoError, Order};
pub use price::Price;
pub use product::Product;
