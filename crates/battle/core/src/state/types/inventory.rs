//! Stacked item storage.

use arrayvec::ArrayVec;

use super::common::ItemId;
use crate::config::BattleConfig;

/// One inventory slot: an item and how many of it are stacked there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: ItemId,
    pub quantity: u16,
}

/// The hero's carried items, at most one slot per distinct item id.
///
/// Stacks grow without a per-slot limit; capacity bounds the number of
/// distinct items carried at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { BattleConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Total quantity carried of one item.
    pub fn quantity_of(&self, item: ItemId) -> u16 {
        self.slots
            .iter()
            .find(|slot| slot.item == item)
            .map_or(0, |slot| slot.quantity)
    }

    /// Whether one more `item` could be stored without dropping anything.
    pub fn can_accept(&self, item: ItemId) -> bool {
        self.slots.iter().any(|slot| slot.item == item) || !self.slots.is_full()
    }

    /// Stores `quantity` of `item`, stacking onto an existing slot or
    /// opening a new one.
    ///
    /// Returns `false` (and stores nothing) when a new slot would be needed
    /// and none is free.
    pub fn add(&mut self, item: ItemId, quantity: u16) -> bool {
        if quantity == 0 {
            return true;
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.item == item) {
            slot.quantity = slot.quantity.saturating_add(quantity);
            return true;
        }
        self.slots.try_push(InventorySlot { item, quantity }).is_ok()
    }

    /// Removes `quantity` of `item`.
    ///
    /// Returns `false` (and removes nothing) when the stack is short.
    /// A slot that reaches zero disappears, freeing its place.
    pub fn remove(&mut self, item: ItemId, quantity: u16) -> bool {
        let Some(index) = self.slots.iter().position(|slot| slot.item == item) else {
            return false;
        };
        if self.slots[index].quantity < quantity {
            return false;
        }
        self.slots[index].quantity -= quantity;
        if self.slots[index].quantity == 0 {
            self.slots.remove(index);
        }
        true
    }
}
