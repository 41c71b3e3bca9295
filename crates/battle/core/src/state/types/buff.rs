//! Timed stat modifiers granted by skills.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// A timed attack/defense modifier.
///
/// `turns` counts whole battle cycles the buff still participates in: a buff
/// granted with 3 turns contributes its deltas to exactly 3 cycles of stat
/// totals before expiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub attack: i32,
    pub defense: i32,
    pub turns: u8,
}

impl Buff {
    pub const fn new(attack: i32, defense: i32, turns: u8) -> Self {
        Self {
            attack,
            defense,
            turns,
        }
    }
}

/// Active buffs on one combatant, capped at `MAX_ACTIVE_BUFFS`.
///
/// Identical buffs stack as separate entries; the ledger never merges them.
/// Entries always have at least one turn remaining.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffLedger {
    entries: ArrayVec<Buff, { BattleConfig::MAX_ACTIVE_BUFFS }>,
}

impl BuffLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.entries.iter()
    }

    /// Adds a buff to the ledger.
    ///
    /// Returns `false` when the buff is dropped instead: either the ledger
    /// is full or the buff has no turns to live.
    pub fn add(&mut self, buff: Buff) -> bool {
        if buff.turns == 0 {
            return false;
        }
        self.entries.try_push(buff).is_ok()
    }

    /// Advances one cycle: decrements every timer and drops expired entries.
    pub fn tick(&mut self) {
        for buff in &mut self.entries {
            buff.turns -= 1;
        }
        self.entries.retain(|buff| buff.turns > 0);
    }

    /// Signed sum of all active attack modifiers.
    pub fn attack_delta(&self) -> i32 {
        self.entries.iter().map(|buff| buff.attack).sum()
    }

    /// Signed sum of all active defense modifiers.
    pub fn defense_delta(&self) -> i32 {
        self.entries.iter().map(|buff| buff.defense).sum()
    }

    /// Removes every buff, expired or not. Used when a battle ends.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
