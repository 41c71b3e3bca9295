//! The persistent hero: progression, resources, and belongings.

use super::abilities::{PassiveSet, SkillSlots};
use super::buff::BuffLedger;
use super::common::ItemId;
use super::equipment::Equipment;
use super::inventory::Inventory;
use crate::config::BattleConfig;
use crate::env::{ItemDefinition, ItemKind};
use crate::error::{BattleError, ErrorSeverity};
use crate::stats::ResourcePool;

/// The player-controlled combatant, persisted across battles.
///
/// Base stats exclude equipment and buffs; effective values come from
/// [`crate::stats::StatTotals`]. The buff ledger is battle-scoped and is
/// cleared whenever a battle ends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub name: String,
    pub level: u32,
    /// Experience accumulated toward the next level. Resets to zero on
    /// level-up; overshoot is discarded.
    pub experience: u32,
    pub experience_to_next: u32,
    pub gold: u32,
    /// Healing potions carried. Counted, not slotted.
    pub potions: u8,
    pub health: ResourcePool,
    pub mana: ResourcePool,
    /// Base attack before equipment and buffs.
    pub attack: u32,
    /// Base defense before equipment and buffs.
    pub defense: u32,
    pub equipment: Equipment,
    pub inventory: Inventory,
    pub skills: SkillSlots,
    pub passives: PassiveSet,
    pub buffs: BuffLedger,
}

impl Hero {
    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    /// Buys one item at the shop markup.
    ///
    /// Consumables go to the potion belt, everything else to the inventory.
    /// Gold changes hands only once the purchase has a place to land.
    /// Returns the price paid.
    pub fn buy_item(
        &mut self,
        definition: &ItemDefinition,
        config: &BattleConfig,
    ) -> Result<u32, TradeError> {
        let price = definition.value.saturating_mul(config.price_markup);
        if self.gold < price {
            return Err(TradeError::InsufficientGold {
                required: price,
                available: self.gold,
            });
        }
        match definition.kind {
            ItemKind::Consumable => {
                self.potions = self.potions.saturating_add(1);
            }
            _ => {
                if !self.inventory.add(definition.id, 1) {
                    return Err(TradeError::InventoryFull {
                        item: definition.id,
                    });
                }
            }
        }
        self.gold -= price;
        Ok(price)
    }

    /// Sells one carried item at its base value. Returns the gold received.
    pub fn sell_item(&mut self, definition: &ItemDefinition) -> Result<u32, TradeError> {
        if !self.inventory.remove(definition.id, 1) {
            return Err(TradeError::NotOwned {
                item: definition.id,
            });
        }
        self.gold = self.gold.saturating_add(definition.value);
        Ok(definition.value)
    }

    /// Moves an item from the inventory into its equipment slot.
    ///
    /// The displaced item, if any, goes back to the inventory and is also
    /// returned. The swap is checked up front so it either fully happens or
    /// not at all.
    pub fn equip_from_inventory(
        &mut self,
        definition: &ItemDefinition,
    ) -> Result<Option<ItemId>, EquipError> {
        let occupant = match definition.kind {
            ItemKind::Weapon { .. } => self.equipment.weapon,
            ItemKind::Armor { .. } => self.equipment.armor,
            _ => {
                return Err(EquipError::NotEquippable {
                    item: definition.id,
                });
            }
        };
        let carried = self.inventory.quantity_of(definition.id);
        if carried == 0 {
            return Err(EquipError::NotOwned {
                item: definition.id,
            });
        }
        if let Some(previous) = occupant {
            // The displaced item needs a home: either removing the equipped
            // copy frees its slot, or an existing slot must take it.
            let frees_slot = carried == 1;
            if !frees_slot && !self.inventory.can_accept(previous) {
                return Err(EquipError::InventoryFull { item: previous });
            }
        }

        self.inventory.remove(definition.id, 1);
        let previous = match definition.kind {
            ItemKind::Weapon { .. } => self.equipment.equip_weapon(definition.id),
            _ => self.equipment.equip_armor(definition.id),
        };
        if let Some(previous) = previous {
            self.inventory.add(previous, 1);
        }
        Ok(previous)
    }

    /// Moves the equipped weapon back to the inventory.
    ///
    /// Returns the item unequipped, or `None` when the slot was empty.
    pub fn unequip_weapon(&mut self) -> Result<Option<ItemId>, EquipError> {
        let Some(item) = self.equipment.weapon else {
            return Ok(None);
        };
        if !self.inventory.can_accept(item) {
            return Err(EquipError::InventoryFull { item });
        }
        self.equipment.unequip_weapon();
        self.inventory.add(item, 1);
        Ok(Some(item))
    }

    /// Moves the equipped armor back to the inventory.
    ///
    /// Returns the item unequipped, or `None` when the slot was empty.
    pub fn unequip_armor(&mut self) -> Result<Option<ItemId>, EquipError> {
        let Some(item) = self.equipment.armor else {
            return Ok(None);
        };
        if !self.inventory.can_accept(item) {
            return Err(EquipError::InventoryFull { item });
        }
        self.equipment.unequip_armor();
        self.inventory.add(item, 1);
        Ok(Some(item))
    }
}

/// Errors from shop trades.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TradeError {
    #[error("not enough gold: need {required}, have {available}")]
    InsufficientGold { required: u32, available: u32 },

    #[error("no free inventory slot for {item}")]
    InventoryFull { item: ItemId },

    #[error("{item} is not in the inventory")]
    NotOwned { item: ItemId },
}

impl BattleError for TradeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientGold { .. } | Self::InventoryFull { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::NotOwned { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientGold { .. } => "INSUFFICIENT_GOLD",
            Self::InventoryFull { .. } => "INVENTORY_FULL",
            Self::NotOwned { .. } => "ITEM_NOT_OWNED",
        }
    }
}

/// Errors from equipment moves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("{item} cannot be equipped")]
    NotEquippable { item: ItemId },

    #[error("{item} is not in the inventory")]
    NotOwned { item: ItemId },

    #[error("no free inventory slot for {item}")]
    InventoryFull { item: ItemId },
}

impl BattleError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotEquippable { .. } | Self::NotOwned { .. } => ErrorSeverity::Validation,
            Self::InventoryFull { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEquippable { .. } => "ITEM_NOT_EQUIPPABLE",
            Self::NotOwned { .. } => "ITEM_NOT_OWNED",
            Self::InventoryFull { .. } => "INVENTORY_FULL",
        }
    }
}
