//! Transition dispatch for hero and monster actions.

use crate::action::{
    ActionTransition, BasicAttackAction, HeroAction, UsePotionAction, UseSkillAction,
};
use crate::env::BattleEnv;
use crate::error::ErrorContext;
use crate::events::BattleEvent;
use crate::state::BattleState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Drives one transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - check preconditions before mutation
/// 2. `apply` - mutate the battle state and collect events
/// 3. `post_validate` - verify postconditions after mutation
#[inline]
pub(super) fn drive_transition<T>(
    transition: &T,
    state: &mut BattleState,
    env: &BattleEnv<'_>,
) -> Result<Vec<BattleEvent>, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let events = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(events)
}

/// Routes a combat action to its transition.
///
/// Control actions (`Flee`, `OpenInventory`) never reach this point; the
/// engine resolves them before the pipeline starts.
pub(super) fn execute_hero_action(
    action: HeroAction,
    state: &mut BattleState,
    env: &BattleEnv<'_>,
) -> Result<Vec<BattleEvent>, ExecuteError> {
    match action {
        HeroAction::BasicAttack => {
            drive_transition(&BasicAttackAction, state, env).map_err(ExecuteError::Attack)
        }
        HeroAction::UseSkill(slot) => {
            drive_transition(&UseSkillAction::new(slot), state, env).map_err(ExecuteError::Skill)
        }
        HeroAction::UsePotion => {
            drive_transition(&UsePotionAction, state, env).map_err(ExecuteError::Potion)
        }
        HeroAction::Flee | HeroAction::OpenInventory => Err(ExecuteError::InvariantViolation {
            context: ErrorContext::new(state.session.cycle)
                .with_message("control action reached the transition pipeline"),
        }),
    }
}
