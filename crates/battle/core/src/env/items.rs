//! Item catalog oracle.

use crate::state::ItemId;

/// What an item is, and the numbers attached to that role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    /// Occupies the weapon slot and adds to attack totals.
    Weapon { attack_bonus: u32 },
    /// Occupies the armor slot and adds to defense totals.
    Armor { defense_bonus: u32 },
    /// Bought into the potion belt rather than the inventory.
    Consumable,
    /// Monster drops with no use beyond their sale value.
    Loot,
}

/// A single entry in the item catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    /// Base worth in gold: the sale price. Purchases pay this times the
    /// shop markup.
    pub value: u32,
}

/// Read-only access to the item catalog.
pub trait ItemOracle: Send + Sync {
    /// Looks up one item by id.
    fn definition(&self, item: ItemId) -> Option<&ItemDefinition>;

    /// All cataloged items, in stable catalog order.
    fn definitions(&self) -> &[ItemDefinition];
}
