//! Cart commands.

use std::io::{self, Write};

use guitarla_cart::{CartStorage, CartStore, StorageError};
use guitarla_core::GuitarId;
use thiserror::Error;

/// Errors that can occur while changing the cart from the command line.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// The id does not name a guitar in the catalog.
    #[error("No guitar with id {0} in the catalog")]
    UnknownGuitar(GuitarId),

    /// Saving the cart failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Add one unit of the catalog guitar `id`.
///
/// # Errors
///
/// Returns [`CartCommandError::UnknownGuitar`] if `id` is not in the catalog,
/// or [`CartCommandError::Storage`] if the cart cannot be saved.
pub fn add<S: CartStorage>(store: &mut CartStore<S>, id: GuitarId) -> Result<(), CartCommandError> {
    let guitar = store
        .catalog()
        .get(id)
        .cloned()
        .ok_or(CartCommandError::UnknownGuitar(id))?;
    store.add_to_cart(&guitar)?;
    Ok(())
}

/// Write the cart lines followed by the item count and total.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show<S: CartStorage>(store: &CartStore<S>, out: &mut impl Write) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "Cart is empty");
    }

    for item in store.cart() {
        writeln!(
            out,
            "{:>3}  {:<12} {:>8} x {}  = {:>8}",
            item.id,
            item.name,
            item.price,
            item.quantity,
            item.line_total()
        )?;
    }
    writeln!(out, "Items: {}", store.item_count())?;
    writeln!(out, "Total: {}", store.cart_total())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use guitarla_cart::{Catalog, MemoryStorage};

    use super::*;

    fn store() -> CartStore<MemoryStorage> {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        CartStore::open(catalog, MemoryStorage::new()).unwrap()
    }

    fn render(store: &CartStore<MemoryStorage>) -> String {
        let mut out = Vec::new();
        show(store, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_unknown_guitar() {
        let mut store = store();
        let err = add(&mut store, GuitarId::new(404)).unwrap_err();
        assert!(matches!(err, CartCommandError::UnknownGuitar(id) if id == GuitarId::new(404)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_show_empty() {
        assert_eq!(render(&store()), "Cart is empty\n");
    }

    #[test]
    fn test_show_lines_and_total() {
        let mut store = store();
        add(&mut store, GuitarId::new(2)).unwrap();
        add(&mut store, GuitarId::new(2)).unwrap();
        add(&mut store, GuitarId::new(4)).unwrap();

        let text = render(&store);
        assert!(text.contains("SRV"));
        assert!(text.contains("VAI"));
        assert!(text.contains("Items: 3"));
        // 349*2 + 299
        assert!(text.ends_with("Total: 997\n"));
    }
}
