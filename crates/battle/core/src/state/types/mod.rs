//! State building blocks shared by the battle container.

mod abilities;
mod buff;
mod common;
mod equipment;
mod hero;
mod inventory;
mod monster;

pub use abilities::{PassiveSet, SkillSlots};
pub use buff::{Buff, BuffLedger};
pub use common::{ItemId, MonsterId, PassiveId, Side, SkillId, SkillSlot};
pub use equipment::Equipment;
pub use hero::{EquipError, Hero, TradeError};
pub use inventory::{Inventory, InventorySlot};
pub use monster::Monster;
