//! StyleMate Core - Shared types library.
//!
//! This crate provides the common types used across all StyleMate components:
//! - `storefront` - Cart, checkout, and catalog state engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart lines, orders, and the price/id newtypes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
