//! Integration tests for GuitarLA.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p guitarla-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Carts surviving across store instances on disk
//! - `cart_properties` - Quantity bounds and totals over generated operation sequences

use std::sync::Arc;

use guitarla_cart::Catalog;

/// The built-in catalog, shared the way the UI shares it with the store.
///
/// # Panics
///
/// Panics if the embedded catalog fails to parse.
#[must_use]
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("builtin catalog parses"))
}
