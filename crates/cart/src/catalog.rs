//! Guitar catalog.
//!
//! The catalog is read once at startup and shared read-only between the cart
//! store and whatever renders it.

use std::collections::HashSet;
use std::path::Path;

use guitarla_core::{Guitar, GuitarId};
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.yaml");

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Duplicate guitar id {0} in catalog")]
    DuplicateId(GuitarId),
}

/// Ordered, immutable list of guitars for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    guitars: Vec<Guitar>,
}

impl Catalog {
    /// Build a catalog from guitars, rejecting repeated ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two guitars share an id.
    pub fn new(guitars: Vec<Guitar>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(guitars.len());
        if let Some(dup) = guitars.iter().find(|g| !seen.insert(g.id)) {
            return Err(CatalogError::DuplicateId(dup.id));
        }
        Ok(Self { guitars })
    }

    /// The shop's own catalog, compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded catalog is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a YAML list of guitars.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed YAML, or
    /// [`CatalogError::DuplicateId`] if two guitars share an id.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let guitars: Vec<Guitar> = serde_yaml::from_str(yaml)?;
        Self::new(guitars)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] if the file cannot be read, otherwise
    /// as [`Catalog::from_yaml_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&yaml)?;
        tracing::info!(path = %path.display(), guitars = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Look up a guitar by id.
    #[must_use]
    pub fn get(&self, id: GuitarId) -> Option<&Guitar> {
        self.guitars.iter().find(|g| g.id == id)
    }

    /// Iterate guitars in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Guitar> {
        self.guitars.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guitars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guitars.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Guitar;
    type IntoIter = std::slice::Iter<'a, Guitar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
