//! Hero actions and the transitions that resolve them.
//!
//! [`HeroAction`] is the full menu an external driver can pick from each
//! cycle. Attack, skill, and potion resolve through [`ActionTransition`]
//! implementations; [`HeroAction::Flee`] and [`HeroAction::OpenInventory`]
//! are control actions the sequencer handles without entering a transition.

mod attack;
mod counter;
mod potion;
mod skill;
mod transition;

pub use attack::BasicAttackAction;
pub use counter::MonsterAttackAction;
pub use potion::{PotionError, UsePotionAction};
pub use skill::{SkillError, UseSkillAction};
pub use transition::ActionTransition;

use crate::state::SkillSlot;

/// One hero action per battle cycle, chosen by the external driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeroAction {
    /// Weapon swing at the hero's full attack total.
    BasicAttack,
    /// Cast the skill learned in the given slot.
    UseSkill(SkillSlot),
    /// Drink one healing potion.
    UsePotion,
    /// Suspend the battle for inventory management. Consumes no cycle.
    OpenInventory,
    /// Abandon the battle. Ends it immediately as a loss.
    Flee,
}

impl HeroAction {
    /// Whether this action resolves through a transition, as opposed to the
    /// control actions the sequencer short-circuits.
    pub const fn is_combat_action(self) -> bool {
        matches!(self, Self::BasicAttack | Self::UseSkill(_) | Self::UsePotion)
    }
}
