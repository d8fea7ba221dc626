//! In-memory cart storage.

use guitarla_core::CartItem;

use super::{CartStorage, StorageError, decode_cart, encode_cart};

/// Keeps the serialized cart in memory.
///
/// Stores the same text [`FileStorage`](super::FileStorage) would write, so
/// tests exercise the real codec. Also counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    raw: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: None,
            writes: 0,
        }
    }

    /// Create storage pre-populated with raw persisted text.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            writes: 0,
        }
    }

    /// The persisted text, if anything has been stored.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        self.raw.as_deref().map(decode_cart).transpose()
    }

    fn save(&mut self, items: &[CartItem]) -> Result<(), StorageError> {
        self.raw = Some(encode_cart(items)?);
        self.writes += 1;
        Ok(())
    }
}
