//! Passive catalog loader.

use std::path::Path;

use crate::catalogs::PassiveCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the passive catalog from RON files.
pub struct PassiveLoader;

impl PassiveLoader {
    /// Load a passive catalog from a RON file.
    ///
    /// RON format: `(passives: [PassiveDefinition, ...])`.
    pub fn load(path: &Path) -> LoadResult<PassiveCatalog> {
        let content = read_file(path)?;
        let catalog: PassiveCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse passive catalog RON: {}", e))?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{PassiveId, PassiveKind, PassiveOracle, Rarity};

    const PASSIVES_RON: &str = r#"(
    passives: [
        (
            id: 1,
            name: "Quick Learner",
            rarity: common,
            kind: experience_boost,
        ),
        (
            id: 8,
            name: "Phoenix Heart",
            rarity: legendary,
            kind: revive,
        ),
    ],
)"#;

    #[test]
    fn loads_rarities_and_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passives.ron");
        std::fs::write(&path, PASSIVES_RON).unwrap();

        let catalog = PassiveLoader::load(&path).unwrap();
        assert_eq!(catalog.definitions().len(), 2);

        let learner = catalog.definition(PassiveId(1)).unwrap();
        assert_eq!(learner.rarity, Rarity::Common);
        assert_eq!(learner.kind, PassiveKind::ExperienceBoost);

        let phoenix = catalog.definition(PassiveId(8)).unwrap();
        assert_eq!(phoenix.rarity, Rarity::Legendary);
        assert_eq!(phoenix.kind, PassiveKind::Revive);
    }
}
