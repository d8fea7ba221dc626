//! GuitarLA Cart - Cart state with pluggable persistence.
//!
//! # Architecture
//!
//! - [`CartStore`] owns the cart and saves it after every change
//! - [`CartStorage`] is the persistence seam; [`MemoryStorage`] for tests,
//!   [`FileStorage`] for a data directory on disk
//! - [`Catalog`] is the read-only list of guitars for sale
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use guitarla_cart::{Catalog, CartStore, MemoryStorage};
//! use guitarla_core::GuitarId;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut store = CartStore::open(Arc::clone(&catalog), MemoryStorage::new())?;
//!
//! let guitar = catalog.get(GuitarId::new(1)).ok_or("missing guitar")?;
//! store.add_to_cart(guitar)?;
//! store.increase_quantity(guitar.id)?;
//!
//! assert_eq!(store.item_count(), 2);
//! assert!(!store.is_empty());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod storage;
pub mod store;
pub mod telemetry;

pub use catalog::{Catalog, CatalogError};
pub use config::{CartConfig, ConfigError, LogFormat};
pub use storage::{CART_STORAGE_KEY, CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CartStore, StoreError};
