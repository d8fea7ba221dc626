//! Catalog item type.

use serde::{Deserialize, Serialize};

use super::{GuitarId, Price};

/// A guitar available for purchase.
///
/// Catalog items are reference data: loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guitar {
    pub id: GuitarId,
    pub name: String,
    /// Image file stem, resolved by the presentation layer.
    pub image: String,
    pub description: String,
    pub price: Price,
}
