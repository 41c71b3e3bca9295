//! Learned skills and passive traits.

use arrayvec::ArrayVec;

use super::common::{PassiveId, SkillId, SkillSlot};
use crate::config::BattleConfig;

/// The hero's skill bar.
///
/// Learned skills occupy numbered slots starting at 1, in learn order.
/// The bar is append-only, so slot numbers stay stable for the hero's
/// lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSlots {
    slots: ArrayVec<SkillId, { BattleConfig::MAX_SKILL_SLOTS }>,
}

impl SkillSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Looks up the skill in a numbered slot.
    pub fn get(&self, slot: SkillSlot) -> Option<SkillId> {
        self.slots.get(slot.index()?).copied()
    }

    pub fn knows(&self, skill: SkillId) -> bool {
        self.slots.contains(&skill)
    }

    /// Learns a skill into the next free slot and returns that slot.
    ///
    /// Returns `None` when the skill is already known or the bar is full.
    pub fn learn(&mut self, skill: SkillId) -> Option<SkillSlot> {
        if self.knows(skill) {
            return None;
        }
        self.slots.try_push(skill).ok()?;
        Some(SkillSlot(self.slots.len() as u8))
    }

    /// Iterates `(slot, skill)` pairs in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (SkillSlot, SkillId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, skill)| (SkillSlot(index as u8 + 1), *skill))
    }
}

/// Passive traits owned by the hero, at most one of each.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveSet {
    owned: ArrayVec<PassiveId, { BattleConfig::MAX_PASSIVES }>,
}

impl PassiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn has(&self, passive: PassiveId) -> bool {
        self.owned.contains(&passive)
    }

    /// Learns a passive. Returns `false` when it is already owned or the
    /// set is full.
    pub fn learn(&mut self, passive: PassiveId) -> bool {
        if self.has(passive) {
            return false;
        }
        self.owned.try_push(passive).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = PassiveId> + '_ {
        self.owned.iter().copied()
    }
}
