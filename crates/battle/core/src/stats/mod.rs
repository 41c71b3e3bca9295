//! Derived stat computation.
//!
//! Effective combat stats are never stored. They are recomputed on demand
//! from base stats, equipped item bonuses, and the signed sum of active
//! buffs, so a buff expiring or an item swap can never leave a stale total
//! behind.

mod resources;

pub use resources::ResourcePool;

use crate::env::{ItemKind, ItemOracle, OracleError};
use crate::state::{Hero, Monster};

/// Effective attack and defense for one combatant at one instant.
///
/// Totals are signed: heavy debuffs may push them below zero. Clamping
/// happens later, at damage mitigation, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTotals {
    pub attack: i32,
    pub defense: i32,
}

impl StatTotals {
    /// Computes the hero's totals: base + equipment bonuses + buff deltas.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemNotFound` if an equipped item is missing
    /// from the catalog.
    pub fn of_hero(hero: &Hero, items: &(impl ItemOracle + ?Sized)) -> Result<Self, OracleError> {
        let mut attack = hero.attack as i32;
        let mut defense = hero.defense as i32;

        if let Some(id) = hero.equipment.weapon {
            let definition = items.definition(id).ok_or(OracleError::ItemNotFound(id))?;
            if let ItemKind::Weapon { attack_bonus } = definition.kind {
                attack += attack_bonus as i32;
            }
        }
        if let Some(id) = hero.equipment.armor {
            let definition = items.definition(id).ok_or(OracleError::ItemNotFound(id))?;
            if let ItemKind::Armor { defense_bonus } = definition.kind {
                defense += defense_bonus as i32;
            }
        }

        attack += hero.buffs.attack_delta();
        defense += hero.buffs.defense_delta();

        Ok(Self { attack, defense })
    }

    /// Computes the monster's totals.
    ///
    /// Monsters carry no equipment or buffs; frost aura weakens their base
    /// attack directly, so base stats are already the whole story.
    pub fn of_monster(monster: &Monster) -> Self {
        Self {
            attack: monster.attack as i32,
            defense: monster.defense as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Buff;
    use crate::testkit;

    #[test]
    fn hero_totals_combine_base_equipment_and_buffs() {
        let items = testkit::items();
        let mut hero = testkit::hero();
        // Base 10/5 plus claw gloves (+5 attack) and kitten hood (+5 defense).
        let totals = StatTotals::of_hero(&hero, &items).unwrap();
        assert_eq!(totals.attack, 15);
        assert_eq!(totals.defense, 10);

        hero.buffs.add(Buff::new(7, -5, 3));
        let totals = StatTotals::of_hero(&hero, &items).unwrap();
        assert_eq!(totals.attack, 22);
        assert_eq!(totals.defense, 5);
    }

    #[test]
    fn hero_totals_can_go_negative() {
        let items = testkit::items();
        let mut hero = testkit::hero();
        hero.buffs.add(Buff::new(-40, -40, 2));
        let totals = StatTotals::of_hero(&hero, &items).unwrap();
        assert_eq!(totals.attack, -25);
        assert_eq!(totals.defense, -30);
    }

    #[test]
    fn unequipped_hero_uses_base_stats() {
        let items = testkit::items();
        let mut hero = testkit::hero();
        hero.equipment.unequip_weapon();
        hero.equipment.unequip_armor();
        let totals = StatTotals::of_hero(&hero, &items).unwrap();
        assert_eq!(totals.attack, 10);
        assert_eq!(totals.defense, 5);
    }

    #[test]
    fn missing_item_definition_is_an_error() {
        let items = testkit::items();
        let mut hero = testkit::hero();
        hero.equipment.weapon = Some(crate::state::ItemId(999));
        assert!(StatTotals::of_hero(&hero, &items).is_err());
    }

    #[test]
    fn monster_totals_mirror_base_stats() {
        let monster = testkit::monster();
        let totals = StatTotals::of_monster(&monster);
        assert_eq!(totals.attack, 10);
        assert_eq!(totals.defense, 2);
    }
}
