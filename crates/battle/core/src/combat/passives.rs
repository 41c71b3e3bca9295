//! Passive trigger evaluation.
//!
//! Passives are plain data on the hero plus kind lookups in the catalog.
//! Each trigger site asks whether the relevant kind is owned and applies
//! the effect itself; nothing here runs on its own schedule.

use crate::env::{BattleEnv, OracleError, PassiveKind, PassiveOracle};
use crate::events::BattleEvent;
use crate::state::{BattleState, Hero};

/// Whether the hero owns a passive of the given kind.
///
/// # Errors
///
/// Returns `OracleError::PassiveNotFound` if an owned passive is missing
/// from the catalog.
pub fn hero_has(
    hero: &Hero,
    passives: &(impl PassiveOracle + ?Sized),
    kind: PassiveKind,
) -> Result<bool, OracleError> {
    for id in hero.passives.iter() {
        let definition = passives
            .definition(id)
            .ok_or(OracleError::PassiveNotFound(id))?;
        if definition.kind == kind {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Death-check revive.
///
/// Fires at most once per battle: when the hero's health is found at zero
/// and the revive passive is owned and unspent, health is restored to a
/// fraction of max and that death event is cancelled. Returns the event,
/// or `None` when the hero stays down.
pub fn try_revive(
    state: &mut BattleState,
    env: &BattleEnv<'_>,
) -> Result<Option<BattleEvent>, OracleError> {
    if state.session.revive_spent {
        return Ok(None);
    }
    if !hero_has(&state.hero, env.passives()?, PassiveKind::Revive)? {
        return Ok(None);
    }
    let config = env.config()?;
    state.session.revive_spent = true;
    let restored = state
        .hero
        .health
        .restore(state.hero.health.maximum() * config.revive_health_percent / 100);
    Ok(Some(BattleEvent::HeroRevived { health: restored }))
}
