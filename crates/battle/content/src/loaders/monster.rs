//! Monster roster loader.

use std::path::Path;

use crate::catalogs::MonsterCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the monster roster from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load a monster roster from a RON file.
    ///
    /// RON format: `(monsters: [MonsterDefinition, ...])`. Each monster may
    /// carry a handful of loot rules; more than the engine's cap is a parse
    /// error.
    pub fn load(path: &Path) -> LoadResult<MonsterCatalog> {
        let content = read_file(path)?;
        let catalog: MonsterCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster roster RON: {}", e))?;

        Ok(catalog)
    }
}
