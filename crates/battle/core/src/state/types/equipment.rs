//! Worn equipment slots.

use super::common::ItemId;

/// The hero's two equipment slots.
///
/// Slots hold catalog references only; the stat bonuses live on the item
/// definitions and are folded in when totals are computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<ItemId>,
    pub armor: Option<ItemId>,
}

impl Equipment {
    pub const fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
        }
    }

    /// Equips a weapon, returning the one it displaced.
    pub fn equip_weapon(&mut self, item: ItemId) -> Option<ItemId> {
        self.weapon.replace(item)
    }

    /// Equips armor, returning the piece it displaced.
    pub fn equip_armor(&mut self, item: ItemId) -> Option<ItemId> {
        self.armor.replace(item)
    }

    /// Clears the weapon slot, returning its occupant.
    pub fn unequip_weapon(&mut self) -> Option<ItemId> {
        self.weapon.take()
    }

    /// Clears the armor slot, returning its occupant.
    pub fn unequip_armor(&mut self) -> Option<ItemId> {
        self.armor.take()
    }
}
