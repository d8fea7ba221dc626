//! Persistence for the cart.
//!
//! The store never touches the disk directly: it is handed a [`CartStorage`]
//! and calls `load` once at startup and `save` after every change.
//!
//! # Layout
//!
//! A single entry under [`CART_STORAGE_KEY`] holding the cart as a JSON array
//! of line items. There is no version tag.
//!
//! # Implementations
//!
//! - [`MemoryStorage`] - In-process fake used by tests
//! - [`FileStorage`] - One JSON file per key inside a data directory

mod file;
mod memory;

use std::path::PathBuf;

use guitarla_core::CartItem;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Errors from reading or writing persisted cart data.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored data exists but is not a valid serialized cart.
    #[error("Stored cart is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The cart could not be serialized.
    #[error("Failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Durable home for the cart.
pub trait CartStorage {
    /// Read the persisted cart.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if stored data cannot be decoded, or
    /// [`StorageError::Io`] if the backing store cannot be read.
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError>;

    /// Replace the persisted cart with `items`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if encoding or writing fails.
    fn save(&mut self, items: &[CartItem]) -> Result<(), StorageError>;
}

/// Serialize cart lines to the persisted text form.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails.
pub fn encode_cart(items: &[CartItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(StorageError::Encode)
}

/// Parse cart lines from the persisted text form.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if `raw` is not a JSON array of line items.
pub fn decode_cart(raw: &str) -> Result<Vec<CartItem>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Corrupt)
}
