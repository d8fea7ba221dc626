//! Cart line items and bounded-quantity cart operations.
//!
//! A [`Cart`] is an ordered list of [`CartItem`]s with at most one line per
//! guitar. Every line's quantity stays within [`MIN_ITEMS`]..=[`MAX_ITEMS`].
//!
//! Each mutating operation returns `true` when the cart changed, so callers
//! that persist the cart can skip writes for no-ops.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Guitar, GuitarId, Price};

/// Maximum quantity of a single guitar in the cart.
pub const MAX_ITEMS: u32 = 5;

/// Minimum quantity of a line that is in the cart.
pub const MIN_ITEMS: u32 = 1;

/// A guitar in the cart together with its purchase quantity.
///
/// Serializes with every catalog field plus `quantity`, matching the layout
/// the browser storefront persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: GuitarId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartItem {
    /// Create a line for `guitar` with the minimum quantity.
    #[must_use]
    pub fn new(guitar: &Guitar) -> Self {
        Self {
            id: guitar.id,
            name: guitar.name.clone(),
            image: guitar.image.clone(),
            description: guitar.description.clone(),
            price: guitar.price,
            quantity: MIN_ITEMS,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Ordered cart contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from persisted lines, repairing anything that breaks the
    /// cart invariants.
    ///
    /// Quantities are clamped into `MIN_ITEMS..=MAX_ITEMS` and repeated ids
    /// keep only their first line. Returns the cart and whether any repair
    /// was needed.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> (Self, bool) {
        let mut seen = HashSet::with_capacity(items.len());
        let mut repaired = false;
        let mut kept = Vec::with_capacity(items.len());

        for mut item in items {
            if !seen.insert(item.id) {
                repaired = true;
                continue;
            }
            let clamped = item.quantity.clamp(MIN_ITEMS, MAX_ITEMS);
            if clamped != item.quantity {
                item.quantity = clamped;
                repaired = true;
            }
            kept.push(item);
        }

        (Self { items: kept }, repaired)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up the line for a guitar.
    #[must_use]
    pub fn get(&self, id: GuitarId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add one unit of `guitar`.
    ///
    /// Appends a new line with quantity 1, or bumps the existing line in
    /// place. A line already at `MAX_ITEMS` is left alone.
    pub fn add(&mut self, guitar: &Guitar) -> bool {
        match self.items.iter_mut().find(|item| item.id == guitar.id) {
            Some(item) if item.quantity >= MAX_ITEMS => false,
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => {
                self.items.push(CartItem::new(guitar));
                true
            }
        }
    }

    /// Remove the line for `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: GuitarId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Increment the quantity of `id` unless it is already at `MAX_ITEMS`.
    pub fn increase(&mut self, id: GuitarId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.quantity < MAX_ITEMS => {
                item.quantity += 1;
                true
            }
            _ => false,
        }
    }

    /// Decrement the quantity of `id` unless it is already at `MIN_ITEMS`.
    ///
    /// Never removes the line; use [`Cart::remove`] for that.
    pub fn decrease(&mut self, id: GuitarId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.quantity > MIN_ITEMS => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        self.items.clear();
        changed
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of `quantity * price` over all lines. No rounding is applied.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
