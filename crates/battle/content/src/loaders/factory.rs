//! Content factory for loading a full data directory.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::catalogs::{ItemCatalog, MonsterCatalog, PassiveCatalog, SkillCatalog};
use crate::loaders::{
    CampaignLoader, CampaignPlan, ConfigLoader, ItemLoader, LoadResult, MonsterLoader,
    PassiveLoader, SkillLoader,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── campaign.toml
/// ├── items.ron
/// ├── skills.ron
/// ├── passives.ron
/// └── monsters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the campaign plan from `campaign.toml`.
    pub fn load_campaign(&self) -> LoadResult<CampaignPlan> {
        let path = self.data_dir.join("campaign.toml");
        CampaignLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        let path = self.data_dir.join("skills.ron");
        SkillLoader::load(&path)
    }

    /// Load the passive catalog from `passives.ron`.
    pub fn load_passives(&self) -> LoadResult<PassiveCatalog> {
        let path = self.data_dir.join("passives.ron");
        PassiveLoader::load(&path)
    }

    /// Load the monster roster from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<MonsterCatalog> {
        let path = self.data_dir.join("monsters.ron");
        MonsterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
