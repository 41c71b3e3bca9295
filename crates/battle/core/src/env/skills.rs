//! Skill catalog oracle.

use crate::state::SkillId;

/// How a skill's power number is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillPower {
    /// A fixed damage or healing quantity.
    Flat(u32),
    /// Percent of the caster's effective attack (150 = 1.5x), floored.
    Scaled(u32),
}

/// The closed catalog of skill effects.
///
/// The kind fully determines the resolution formula; adding a new effect
/// means adding a variant here and a match arm to the effect resolver.
/// Catalog data can reskin and retune effects, not invent new ones.
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
pub enum SkillKind {
    /// Attack-scaled hit, reduced by target defense.
    Damage,
    /// Flat hit, reduced by target defense.
    MagicDamage,
    /// Restores caster health, capped at max.
    Heal,
    /// Two sequential attack-scaled hits, each mitigated on its own.
    MultiHit,
    /// Timed defense buff on the caster.
    BuffDefense,
    /// Trades defense for attack for a few turns.
    Berserk,
    /// Flat hit; the caster sacrifices health up front and heals back by
    /// the damage actually dealt.
    Drain,
    /// Flat hit with a chance of unmitigated recoil on the caster.
    RiskyBlast,
    /// Trades attack for a strong timed defense buff.
    IceWall,
    /// Flat hit that also leaves a short defense debuff on the caster.
    LightningChain,
}

/// A single entry in the skill catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub mana_cost: u32,
    pub power: SkillPower,
    pub kind: SkillKind,
}

/// Read-only access to the skill catalog.
pub trait SkillOracle: Send + Sync {
    /// Looks up one skill by id.
    fn definition(&self, skill: SkillId) -> Option<&SkillDefinition>;

    /// All cataloged skills, in stable catalog order.
    fn definitions(&self) -> &[SkillDefinition];
}
