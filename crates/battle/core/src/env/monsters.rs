//! Monster catalog oracle.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::state::{ItemId, MonsterId};

/// One independent drop roll attached to a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootRule {
    pub item: ItemId,
    /// Chance (d100, percent) that the drop happens at all.
    pub chance_percent: u32,
    /// Inclusive quantity bounds rolled once the drop happens.
    pub min_quantity: u16,
    pub max_quantity: u16,
}

/// A single entry in the monster catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterDefinition {
    pub id: MonsterId,
    pub name: String,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub experience_reward: u32,
    /// Each rule rolls independently on victory.
    pub loot: ArrayVec<LootRule, { BattleConfig::MAX_LOOT_RULES }>,
}

/// Read-only access to the monster catalog.
pub trait MonsterOracle: Send + Sync {
    /// Looks up one monster by id.
    fn definition(&self, monster: MonsterId) -> Option<&MonsterDefinition>;

    /// All cataloged monsters, in stable catalog order.
    fn definitions(&self) -> &[MonsterDefinition];
}
