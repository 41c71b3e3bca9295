//! Battle content: built-in catalogs and data-file loaders.
//!
//! This crate houses the stock catalogs and provides loaders for RON/TOML
//! data files:
//! - Item, skill, passive, and monster catalogs (built-in or data-driven
//!   via RON)
//! - Campaign plan (data-driven via TOML)
//! - Battle configuration overrides (data-driven via TOML)
//!
//! Content is consumed through the core's oracle traits and never appears
//! in battle state.

pub mod builtin;
pub mod catalogs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalogs::{ItemCatalog, MonsterCatalog, PassiveCatalog, SkillCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{
    CampaignLoader, CampaignPlan, ConfigLoader, ContentFactory, ItemLoader, MonsterLoader,
    PassiveLoader, SkillLoader,
};
