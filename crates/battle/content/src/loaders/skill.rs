//! Skill catalog loader.

use std::path::Path;

use crate::catalogs::SkillCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the skill catalog from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load a skill catalog from a RON file.
    ///
    /// RON format: `(skills: [SkillDefinition, ...])`. Powers are spelled
    /// `flat(n)` or `scaled(percent)`; kinds use the snake_case effect tags.
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        let catalog: SkillCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        Ok(catalog)
    }
}
