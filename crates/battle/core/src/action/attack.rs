//! The hero's basic attack.

use super::transition::ActionTransition;
use crate::combat::mitigate;
use crate::env::{BattleEnv, OracleError, compute_seed, context};
use crate::events::BattleEvent;
use crate::state::{BattleState, Side};
use crate::stats::StatTotals;

/// Weapon swing at the hero's full attack total, with a critical roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BasicAttackAction;

impl ActionTransition for BasicAttackAction {
    type Error = OracleError;

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Vec<BattleEvent>, OracleError> {
        let config = env.config()?;
        let totals = StatTotals::of_hero(&state.hero, env.items()?)?;

        let seed = compute_seed(
            state.session.seed,
            state.session.cycle,
            Side::Hero,
            context::CRIT,
        );
        let critical = env.rng()?.roll_d100(seed) <= config.crit_chance_percent;

        let mut raw = i64::from(totals.attack);
        if critical {
            raw *= 2;
        }
        let defense = i64::from(StatTotals::of_monster(&state.monster).defense);
        let amount = state.monster.health.deplete(mitigate(raw, defense));

        Ok(vec![BattleEvent::DamageDealt {
            target: Side::Monster,
            amount,
            critical,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{self, FixedRng};

    #[test]
    fn attack_applies_mitigated_damage() {
        let (mut state, fixtures) = testkit::battle();

        let events = BasicAttackAction.apply(&mut state, &fixtures.env()).unwrap();

        // 15 total attack against 2 defense, no critical on a roll of 100.
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 13,
                critical: false,
            }]
        );
        assert_eq!(state.monster.health.current(), 37);
    }

    #[test]
    fn bare_hands_swing_at_base_attack() {
        let (mut state, fixtures) = testkit::battle();
        state.hero.equipment.weapon = None;
        state.hero.equipment.armor = None;

        let events = BasicAttackAction.apply(&mut state, &fixtures.env()).unwrap();

        // 10 base attack against 2 defense.
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 8,
                critical: false,
            }]
        );
    }

    #[test]
    fn critical_doubles_raw_attack_before_mitigation() {
        let (mut state, fixtures) = testkit::battle();
        let rng = FixedRng::rolling(1);
        let env = fixtures.env_with_rng(&rng);

        let events = BasicAttackAction.apply(&mut state, &env).unwrap();

        // (15 * 2) - 2 = 28, not (15 - 2) * 2.
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 28,
                critical: true,
            }]
        );
    }

    #[test]
    fn overkill_damage_reports_remaining_health_only() {
        let (mut state, fixtures) = testkit::battle();
        state.monster.health.deplete(45);

        let events = BasicAttackAction.apply(&mut state, &fixtures.env()).unwrap();

        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 5,
                critical: false,
            }]
        );
        assert!(!state.monster.is_alive());
    }
}
