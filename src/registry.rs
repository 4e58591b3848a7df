use std::sync::OnceLock;

use thiserror::Error;

use crate::data::{load_default_catalog, CatalogError, IdeologyCatalog, IdeologyEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("ideology index {index} out of range (0..{count})")]
    OutOfRange { index: usize, count: usize },
}

/// Ordered, read-only set of ideologies. Indices are positions in catalog order.
#[derive(Debug, Clone)]
pub struct IdeologyRegistry {
    entries: Vec<IdeologyEntry>,
}

impl IdeologyRegistry {
    pub fn from_catalog(catalog: IdeologyCatalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self {
            entries: catalog.ideologies,
        })
    }

    /// Process-wide registry built from the embedded catalog on first access.
    pub fn global() -> Result<&'static IdeologyRegistry, CatalogError> {
        static REGISTRY: OnceLock<IdeologyRegistry> = OnceLock::new();
        if let Some(registry) = REGISTRY.get() {
            return Ok(registry);
        }
        let registry = Self::from_catalog(load_default_catalog()?)?;
        log::debug!("ideology registry built with {} entries", registry.len());
        Ok(REGISTRY.get_or_init(|| registry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn list_entries(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.name.as_str()))
    }

    pub fn resolve(&self, index: usize) -> Result<&IdeologyEntry, RegistryError> {
        self.entries.get(index).ok_or(RegistryError::OutOfRange {
            index,
            count: self.entries.len(),
        })
    }
}
