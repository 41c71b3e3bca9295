//! Vec-backed catalogs implementing the core oracle traits.
//!
//! Each catalog doubles as the on-disk schema for its RON file, so a loaded
//! file and a built-in constructor produce the same type.

use battle_core::{
    ItemDefinition, ItemId, ItemOracle, MonsterDefinition, MonsterId, MonsterOracle,
    PassiveDefinition, PassiveId, PassiveOracle, SkillDefinition, SkillId, SkillOracle,
};

/// The full set of item definitions available to a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, item: ItemId) -> Option<&ItemDefinition> {
        self.items.iter().find(|definition| definition.id == item)
    }

    fn definitions(&self) -> &[ItemDefinition] {
        &self.items
    }
}

/// The full set of skill definitions available to a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCatalog {
    pub skills: Vec<SkillDefinition>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<SkillDefinition>) -> Self {
        Self { skills }
    }
}

impl SkillOracle for SkillCatalog {
    fn definition(&self, skill: SkillId) -> Option<&SkillDefinition> {
        self.skills.iter().find(|definition| definition.id == skill)
    }

    fn definitions(&self) -> &[SkillDefinition] {
        &self.skills
    }
}

/// The full set of passive definitions available to a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveCatalog {
    pub passives: Vec<PassiveDefinition>,
}

impl PassiveCatalog {
    pub fn new(passives: Vec<PassiveDefinition>) -> Self {
        Self { passives }
    }
}

impl PassiveOracle for PassiveCatalog {
    fn definition(&self, passive: PassiveId) -> Option<&PassiveDefinition> {
        self.passives
            .iter()
            .find(|definition| definition.id == passive)
    }

    fn definitions(&self) -> &[PassiveDefinition] {
        &self.passives
    }
}

/// The full monster roster available to a campaign.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterDefinition>,
}

impl MonsterCatalog {
    pub fn new(monsters: Vec<MonsterDefinition>) -> Self {
        Self { monsters }
    }
}

impl MonsterOracle for MonsterCatalog {
    fn definition(&self, monster: MonsterId) -> Option<&MonsterDefinition> {
        self.monsters
            .iter()
            .find(|definition| definition.id == monster)
    }

    fn definitions(&self) -> &[MonsterDefinition] {
        &self.monsters
    }
}
