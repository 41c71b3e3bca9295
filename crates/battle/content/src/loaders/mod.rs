//! Content loaders for reading battle data from files.
//!
//! Catalogs live in RON files and deserialize straight into the types from
//! [`crate::catalogs`]. The campaign plan and battle configuration live in
//! TOML.

pub mod campaign;
pub mod config;
pub mod factory;
pub mod item;
pub mod monster;
pub mod passive;
pub mod skill;

pub use campaign::{CampaignLoader, CampaignPlan};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use monster::MonsterLoader;
pub use passive::PassiveLoader;
pub use skill::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
