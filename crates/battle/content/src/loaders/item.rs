//! Item catalog loader.

use std::path::Path;

use crate::catalogs::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// RON format: `(items: [ItemDefinition, ...])`.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog)
    }
}
