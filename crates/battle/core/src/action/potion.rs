//! Potion use.

use super::transition::ActionTransition;
use crate::env::{BattleEnv, OracleError};
use crate::error::{BattleError, ErrorSeverity};
use crate::events::BattleEvent;
use crate::state::BattleState;

/// Drinks one healing potion from the hero's belt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsePotionAction;

/// Errors a potion use can be refused with.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PotionError {
    /// The potion belt is empty.
    #[error("no potions left")]
    InsufficientPotions,
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BattleError for PotionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientPotions => ErrorSeverity::Recoverable,
            Self::Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPotions => "INSUFFICIENT_POTIONS",
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}

impl ActionTransition for UsePotionAction {
    type Error = PotionError;

    fn pre_validate(&self, state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), PotionError> {
        if state.hero.potions == 0 {
            return Err(PotionError::InsufficientPotions);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Vec<BattleEvent>, PotionError> {
        if state.hero.potions == 0 {
            return Err(PotionError::InsufficientPotions);
        }
        state.hero.potions -= 1;

        let restored = state.hero.health.restore(env.config()?.potion_heal);
        Ok(vec![BattleEvent::PotionConsumed { restored }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn potion_restores_up_to_the_heal_amount() {
        let (mut state, fixtures) = testkit::battle();
        state.hero.potions = 2;
        state.hero.health.deplete(60);

        let events = UsePotionAction.apply(&mut state, &fixtures.env()).unwrap();

        assert_eq!(events, vec![BattleEvent::PotionConsumed { restored: 50 }]);
        assert_eq!(state.hero.potions, 1);
        assert_eq!(state.hero.health.current(), 90);
    }

    #[test]
    fn healing_is_clamped_at_full_health() {
        let (mut state, fixtures) = testkit::battle();
        state.hero.potions = 1;
        state.hero.health.deplete(10);

        let events = UsePotionAction.apply(&mut state, &fixtures.env()).unwrap();

        assert_eq!(events, vec![BattleEvent::PotionConsumed { restored: 10 }]);
        assert!(state.hero.health.is_full());
    }

    #[test]
    fn empty_belt_is_a_recoverable_refusal() {
        let (mut state, fixtures) = testkit::battle();
        state.hero.potions = 0;
        let env = fixtures.env();

        let error = UsePotionAction.pre_validate(&state, &env).unwrap_err();
        assert_eq!(error, PotionError::InsufficientPotions);
        assert!(error.severity().is_recoverable());

        assert_eq!(
            UsePotionAction.apply(&mut state, &env),
            Err(PotionError::InsufficientPotions)
        );
    }
}
