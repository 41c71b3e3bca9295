//! Start-of-cycle bookkeeping: buff decay and per-cycle passive upkeep.

use crate::combat::hero_has;
use crate::env::{BattleEnv, OracleError, PassiveKind};
use crate::events::BattleEvent;
use crate::state::BattleState;

/// Runs the start-of-cycle steps: the one-shot frost aura opener, buff
/// decay, then the regeneration passives.
///
/// Order matters. Buffs tick before the hero acts, so a buff granted with
/// `turns = n` covers the cycle it was cast in plus the next `n - 1`.
/// Regeneration runs after the tick and only reports when it restored
/// something.
pub(super) fn run_cycle_start(
    state: &mut BattleState,
    env: &BattleEnv<'_>,
) -> Result<Vec<BattleEvent>, OracleError> {
    let config = env.config()?;
    let passives = env.passives()?;
    let mut events = vec![BattleEvent::CycleStarted {
        cycle: state.session.cycle,
    }];

    if state.session.frost_armed {
        state.session.frost_armed = false;
        if hero_has(&state.hero, passives, PassiveKind::FrostAura)? {
            let amount = state.monster.weaken_attack(config.frost_aura_reduction);
            if amount > 0 {
                events.push(BattleEvent::MonsterWeakened { amount });
            }
        }
    }

    state.hero.buffs.tick();

    if hero_has(&state.hero, passives, PassiveKind::Regen)? {
        let amount = state.hero.health.restore(config.regen_health_per_cycle);
        if amount > 0 {
            events.push(BattleEvent::HealthRegenerated { amount });
        }
    }
    if hero_has(&state.hero, passives, PassiveKind::ManaRegen)? {
        let amount = state.hero.mana.restore(config.regen_mana_per_cycle);
        if amount > 0 {
            events.push(BattleEvent::ManaRegenerated { amount });
        }
    }

    Ok(events)
}
