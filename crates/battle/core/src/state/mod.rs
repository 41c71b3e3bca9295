//! Battle state: combatants, belongings, and sequencing bookkeeping.

mod battle;
mod types;

pub use battle::{BattlePhase, BattleState, SessionState};
pub use types::{
    Buff, BuffLedger, EquipError, Equipment, Hero, Inventory, InventorySlot, ItemId, Monster,
    MonsterId, PassiveId, PassiveSet, Side, SkillId, SkillSlot, SkillSlots, TradeError,
};
