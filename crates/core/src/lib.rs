//! GuitarLA Core - Shared domain types.
//!
//! This crate provides the types used across all GuitarLA components:
//! - `cart` - Cart store with injected persistence and the guitar catalog
//! - `cli` - Command-line driver for browsing the catalog and editing the cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage access. Anything that touches the disk lives in `guitarla-cart`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the catalog item
//! - [`cart`] - Cart line items and the bounded-quantity cart operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartItem, MAX_ITEMS, MIN_ITEMS};
pub use types::*;
