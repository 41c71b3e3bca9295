//! The battle-scoped monster combatant.

use super::common::MonsterId;
use crate::env::MonsterDefinition;
use crate::stats::ResourcePool;

/// The opposing combatant, instantiated fresh for each battle.
///
/// Only mutable combat state lives here; name, experience reward, and loot
/// rules stay on the catalog definition and are looked up by id when needed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: MonsterId,
    pub health: ResourcePool,
    /// Current attack. Starts at the catalog value; frost aura lowers it.
    pub attack: u32,
    pub defense: u32,
}

impl Monster {
    /// Instantiates a monster at full health from its catalog definition.
    pub fn spawn(definition: &MonsterDefinition) -> Self {
        Self {
            id: definition.id,
            health: ResourcePool::new(definition.max_health),
            attack: definition.attack,
            defense: definition.defense,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    /// Permanently lowers attack for the rest of the battle, flooring at 0.
    /// Returns the reduction actually applied.
    pub fn weaken_attack(&mut self, amount: u32) -> u32 {
        let before = self.attack;
        self.attack = self.attack.saturating_sub(amount);
        before - self.attack
    }
}
