//! File-backed cart storage.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use guitarla_core::CartItem;
use tempfile::NamedTempFile;

use super::{CART_STORAGE_KEY, CartStorage, StorageError, decode_cart, encode_cart};

/// Stores each key as `<key>.json` inside a data directory.
///
/// The directory is created on first write. Writes go to a temporary file
/// in the same directory that is persisted over the target, so a crash never
/// leaves a half-written cart behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the cart file.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.dir.join(format!("{CART_STORAGE_KEY}.json"))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let path = self.cart_path();
        match fs::read_to_string(&path) {
            Ok(raw) => decode_cart(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn save(&mut self, items: &[CartItem]) -> Result<(), StorageError> {
        let raw = encode_cart(items)?;
        fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;

        let path = self.cart_path();
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_error(&self.dir))?;
        tmp.write_all(raw.as_bytes()).map_err(io_error(tmp.path()))?;
        tmp.persist(&path).map_err(|e| io_error(&path)(e.error))?;

        tracing::debug!(path = %path.display(), lines = items.len(), "Cart written");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use guitarla_core::{Guitar, GuitarId, Price};

    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("data"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_dir_and_round_trips() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("data");
        let mut storage = FileStorage::new(&dir);
        let guitar = Guitar {
            id: GuitarId::new(5),
            name: "Thompson".to_string(),
            image: "guitarra_05".to_string(),
            description: "Morbi".to_string(),
            price: Price::from_units(399),
        };
        let items = vec![CartItem::new(&guitar)];

        storage.save(&items).unwrap();
        assert!(storage.cart_path().exists());
        assert_eq!(storage.load().unwrap(), Some(items));

        // Only the cart file remains; the temporary file was persisted over it.
        let entries: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("cart.json")]);
    }

    #[test]
    fn test_save_replaces_previous_cart() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        let guitar = Guitar {
            id: GuitarId::new(1),
            name: "Lukather".to_string(),
            image: "guitarra_01".to_string(),
            description: "Morbi".to_string(),
            price: Price::from_units(299),
        };

        storage.save(&[CartItem::new(&guitar)]).unwrap();
        storage.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(storage.cart_path()).unwrap(), "[]");
    }

    #[test]
    fn test_corrupt_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(storage.cart_path(), "definitely not json").unwrap();

        assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
    }
}
