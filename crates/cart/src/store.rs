//! Cart store.
//!
//! [`CartStore`] owns the cart, applies the bounded-quantity operations from
//! [`guitarla_core::Cart`], and writes the cart to its [`CartStorage`] after
//! every change. Readers get snapshots; all mutation goes through the store.
//!
//! # Persistence
//!
//! - A mutation that changes the cart is saved before the call returns.
//! - A no-op (unknown id, quantity already at a bound) is not saved.
//! - [`CartStore::clear_cart`] always saves, even on an empty cart, so it can
//!   overwrite a stored snapshot that failed to load.
//!
//! If a save fails the in-memory cart still holds the change and the error is
//! returned to the caller.

use std::sync::Arc;

use guitarla_core::{Cart, CartItem, Guitar, GuitarId, Price};
use thiserror::Error;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::storage::{CartStorage, StorageError};

/// Errors that can occur when opening a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to load cart: {0}")]
    Load(#[source] StorageError),
}

/// Cart state plus the storage it persists to.
#[derive(Debug)]
pub struct CartStore<S> {
    catalog: Arc<Catalog>,
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Open a store, restoring the persisted cart.
    ///
    /// Nothing stored yields an empty cart. A stored cart that cannot be
    /// decoded is logged and replaced by an empty cart; lines that break the
    /// quantity or uniqueness rules are repaired.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Load`] if the storage itself cannot be read.
    pub fn open(catalog: Arc<Catalog>, storage: S) -> Result<Self, StoreError> {
        let cart = match storage.load() {
            Ok(Some(items)) => {
                let (cart, repaired) = Cart::from_items(items);
                if repaired {
                    tracing::warn!(lines = cart.len(), "Stored cart repaired on load");
                }
                cart
            }
            Ok(None) => Cart::new(),
            Err(StorageError::Corrupt(e)) => {
                tracing::warn!(error = %e, "Stored cart is unreadable, starting empty");
                Cart::new()
            }
            Err(e) => return Err(StoreError::Load(e)),
        };

        tracing::debug!(lines = cart.len(), "Cart store opened");
        Ok(Self {
            catalog,
            cart,
            storage,
        })
    }

    /// Add one unit of `item`, appending it if it is not in the cart yet.
    ///
    /// A line already at the maximum quantity is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated cart cannot be saved.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn add_to_cart(&mut self, item: &Guitar) -> Result<(), StorageError> {
        let changed = self.cart.add(item);
        self.persist_if(changed)
    }

    /// Remove the line for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: GuitarId) -> Result<(), StorageError> {
        let changed = self.cart.remove(id);
        self.persist_if(changed)
    }

    /// Increment the quantity of `id`, up to the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn increase_quantity(&mut self, id: GuitarId) -> Result<(), StorageError> {
        let changed = self.cart.increase(id);
        self.persist_if(changed)
    }

    /// Decrement the quantity of `id`, down to the minimum.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn decrease_quantity(&mut self, id: GuitarId) -> Result<(), StorageError> {
        let changed = self.cart.decrease(id);
        self.persist_if(changed)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the empty cart cannot be saved.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.persist()
    }

    /// The catalog this store sells from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        self.cart.items()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of `quantity * price` over all lines.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total()
    }

    /// Total units in the cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// The storage backing this store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn persist_if(&mut self, changed: bool) -> Result<(), StorageError> {
        if changed {
            self.persist()
        } else {
            tracing::debug!("Cart unchanged, skipping save");
            Ok(())
        }
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.storage.save(self.cart.items()).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to save cart");
        })
    }
}
