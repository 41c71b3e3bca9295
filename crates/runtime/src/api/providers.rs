//! Asynchronous abstractions for sourcing hero intent.
//!
//! Drivers plug in [`ActionProvider`] implementations so a battle can run
//! with human input, scripted fixtures, or bot policies. Inventory pauses
//! and level-up picks go through the same seam via [`InventoryHandler`]
//! and [`AdvancementChooser`].
use std::collections::VecDeque;

use async_trait::async_trait;
use battle_core::{AdvancementOffer, BattleState, Hero, HeroAction, ItemOracle};
use tokio::sync::Mutex;

use super::errors::{Result, RuntimeError};

/// Trait for providing the hero's next action.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide the next hero action for the current battle state.
    ///
    /// Called once per cycle, and again whenever the engine refuses the
    /// previous submission with a recoverable rejection.
    async fn provide_action(&self, state: &BattleState) -> Result<HeroAction>;
}

/// An action provider that always presses basic attack.
/// Useful for testing or as a fallback.
pub struct AttackActionProvider;

#[async_trait]
impl ActionProvider for AttackActionProvider {
    async fn provide_action(&self, _state: &BattleState) -> Result<HeroAction> {
        Ok(HeroAction::BasicAttack)
    }
}

/// Replays a fixed action script, front to back.
///
/// Errors with [`RuntimeError::ScriptExhausted`] once the script runs dry,
/// which keeps a mis-scripted battle from spinning forever.
pub struct ScriptedActionProvider {
    script: Mutex<VecDeque<HeroAction>>,
    length: usize,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = HeroAction>) -> Self {
        let script: VecDeque<HeroAction> = actions.into_iter().collect();
        let length = script.len();
        Self {
            script: Mutex::new(script),
            length,
        }
    }
}

#[async_trait]
impl ActionProvider for ScriptedActionProvider {
    async fn provide_action(&self, _state: &BattleState) -> Result<HeroAction> {
        self.script
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::ScriptExhausted {
                submitted: self.length,
            })
    }
}

/// Trait for resolving an inventory pause.
///
/// Opening the inventory suspends the battle without spending the cycle.
/// The handler gets the hero to swap equipment or shuffle the bag, then
/// combat resumes in the same cycle. Sessions without a handler skip the
/// pause and simply resume.
#[async_trait]
pub trait InventoryHandler: Send + Sync {
    async fn manage(&self, hero: &mut Hero, items: &dyn ItemOracle) -> Result<()>;
}

/// Trait for picking from a level-up offer sheet.
///
/// Returning `None` declines the sheet; the hero keeps what they have.
#[async_trait]
pub trait AdvancementChooser: Send + Sync {
    async fn choose(
        &self,
        hero: &Hero,
        offers: &[AdvancementOffer],
    ) -> Result<Option<AdvancementOffer>>;
}

/// Takes the first offer on every sheet. Useful for testing.
pub struct FirstOfferChooser;

#[async_trait]
impl AdvancementChooser for FirstOfferChooser {
    async fn choose(
        &self,
        _hero: &Hero,
        offers: &[AdvancementOffer],
    ) -> Result<Option<AdvancementOffer>> {
        Ok(offers.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_content::builtin;
    use battle_core::{Monster, MonsterOracle, SkillSlot};

    fn probe_state() -> BattleState {
        let monsters = builtin::monster_catalog();
        let goblin = monsters.definition(builtin::monsters::GOBLIN).unwrap();
        BattleState::new(builtin::starting_hero("probe"), Monster::spawn(goblin), 7)
    }

    #[tokio::test]
    async fn scripts_replay_in_order_then_run_dry() {
        let provider = ScriptedActionProvider::new([
            HeroAction::BasicAttack,
            HeroAction::UseSkill(SkillSlot(1)),
            HeroAction::Flee,
        ]);
        let state = probe_state();

        assert_eq!(
            provider.provide_action(&state).await.unwrap(),
            HeroAction::BasicAttack
        );
        assert_eq!(
            provider.provide_action(&state).await.unwrap(),
            HeroAction::UseSkill(SkillSlot(1))
        );
        assert_eq!(
            provider.provide_action(&state).await.unwrap(),
            HeroAction::Flee
        );
        assert!(matches!(
            provider.provide_action(&state).await,
            Err(RuntimeError::ScriptExhausted { submitted: 3 })
        ));
    }

    #[tokio::test]
    async fn the_fallback_provider_always_attacks() {
        let state = probe_state();
        assert_eq!(
            AttackActionProvider.provide_action(&state).await.unwrap(),
            HeroAction::BasicAttack
        );
    }
}
