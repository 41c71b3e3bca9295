//! Three-phase action transitions.

use crate::env::BattleEnv;
use crate::error::BattleError;
use crate::events::BattleEvent;
use crate::state::BattleState;

/// A state transition resolved in three phases: pre-validate, apply,
/// post-validate.
///
/// `pre_validate` must reject without mutating, so a refused action leaves
/// the battle exactly as it found it and the driver can simply ask for
/// another. `apply` performs the mutation and reports what happened.
/// `post_validate` is a final consistency check.
pub trait ActionTransition {
    /// Error the transition can fail with.
    type Error: BattleError;

    /// Checks the action against current state without touching it.
    fn pre_validate(&self, _state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action, returning the events it produced in order.
    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Vec<BattleEvent>, Self::Error>;

    /// Verifies state consistency after application.
    fn post_validate(&self, _state: &BattleState, _env: &BattleEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
