//! Passive trait catalog oracle.

use crate::state::PassiveId;

/// Rarity tier of a passive, used as its draw weight in advancement offers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Draw weight for advancement offers. Commoner tiers come up more.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Common => 5,
            Self::Uncommon => 4,
            Self::Rare => 3,
            Self::Epic => 2,
            Self::Legendary => 1,
        }
    }
}

/// The closed catalog of passive trait effects.
///
/// Like skill kinds, the kind fully determines behavior; catalog data picks
/// which kinds exist under what names and rarities.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassiveKind {
    /// Bonus percent on victory experience.
    ExperienceBoost,
    /// Bonus percent on victory gold.
    GoldBoost,
    /// Restores a little health at the start of every cycle.
    Regen,
    /// Restores a little mana at the start of every cycle.
    ManaRegen,
    /// Permanently weakens the monster's attack as the battle opens.
    FrostAura,
    /// Chance to fully evade a monster attack, checked before mitigation.
    Dodge,
    /// Returns a share of damage actually taken to the monster.
    Retaliation,
    /// Once per battle, survive a killing blow with a fraction of max
    /// health.
    Revive,
}

/// A single entry in the passive catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveDefinition {
    pub id: PassiveId,
    pub name: String,
    pub rarity: Rarity,
    pub kind: PassiveKind,
}

/// Read-only access to the passive catalog.
pub trait PassiveOracle: Send + Sync {
    /// Looks up one passive by id.
    fn definition(&self, passive: PassiveId) -> Option<&PassiveDefinition>;

    /// All cataloged passives, in stable catalog order.
    fn definitions(&self) -> &[PassiveDefinition];
}
