//! The monster's counter-attack.

use super::transition::ActionTransition;
use crate::combat::{hero_has, mitigate};
use crate::env::{BattleEnv, OracleError, PassiveKind, compute_seed, context};
use crate::events::BattleEvent;
use crate::state::{BattleState, Side};
use crate::stats::StatTotals;

/// The monster's scripted strike, driven by the sequencer after every
/// resolved hero action.
///
/// Dodge is checked before any damage math and negates the whole strike,
/// critical included. Retaliation returns a share of the damage actually
/// taken, so a fully mitigated hit returns nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonsterAttackAction;

impl ActionTransition for MonsterAttackAction {
    type Error = OracleError;

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Vec<BattleEvent>, OracleError> {
        let config = env.config()?;
        let rng = env.rng()?;
        let battle_seed = state.session.seed;
        let cycle = state.session.cycle;

        if hero_has(&state.hero, env.passives()?, PassiveKind::Dodge)? {
            let seed = compute_seed(battle_seed, cycle, Side::Hero, context::DODGE);
            if rng.roll_d100(seed) <= config.dodge_chance_percent {
                return Ok(vec![BattleEvent::AttackDodged]);
            }
        }

        let seed = compute_seed(battle_seed, cycle, Side::Monster, context::CRIT);
        let critical = rng.roll_d100(seed) <= config.crit_chance_percent;

        let mut raw = i64::from(StatTotals::of_monster(&state.monster).attack);
        if critical {
            raw *= 2;
        }
        let totals = StatTotals::of_hero(&state.hero, env.items()?)?;
        let amount = state
            .hero
            .health
            .deplete(mitigate(raw, i64::from(totals.defense)));

        let mut events = vec![BattleEvent::DamageDealt {
            target: Side::Hero,
            amount,
            critical,
        }];

        if amount > 0 && hero_has(&state.hero, env.passives()?, PassiveKind::Retaliation)? {
            let returned = u64::from(amount) * u64::from(config.retaliation_percent) / 100;
            if returned > 0 {
                let dealt = state.monster.health.deplete(returned.min(u32::MAX as u64) as u32);
                events.push(BattleEvent::Retaliated { amount: dealt });
            }
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;
    use crate::testkit::{self, FixedRng};

    #[test]
    fn monster_hits_through_hero_defense() {
        let (mut state, fixtures) = testkit::battle();

        let events = MonsterAttackAction
            .apply(&mut state, &fixtures.env())
            .unwrap();

        // 10 attack against the hero's 10 defense total leaves nothing.
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Hero,
                amount: 0,
                critical: false,
            }]
        );
        assert!(state.hero.health.is_full());
    }

    #[test]
    fn critical_breaks_through_mitigation() {
        let (mut state, fixtures) = testkit::battle();
        let rng = FixedRng::rolling(1);
        let env = fixtures.env_with_rng(&rng);

        let events = MonsterAttackAction.apply(&mut state, &env).unwrap();

        // (10 * 2) - 10 = 10.
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Hero,
                amount: 10,
                critical: true,
            }]
        );
        assert_eq!(state.hero.health.current(), 90);
    }

    #[test]
    fn dodge_negates_the_whole_strike() {
        let (mut state, fixtures) = testkit::battle();
        state.hero.passives.learn(testkit::SHADOW_STEP);
        let rng = FixedRng::rolling(1);
        let env = fixtures.env_with_rng(&rng);

        let events = MonsterAttackAction.apply(&mut state, &env).unwrap();

        assert_eq!(events, vec![BattleEvent::AttackDodged]);
        assert!(state.hero.health.is_full());
        assert!(state.monster.health.is_full());
    }

    #[test]
    fn retaliation_returns_a_share_of_damage_taken() {
        let (mut state, fixtures) = testkit::battle();
        state.hero.passives.learn(testkit::THORN_HIDE);
        // Strip the hero's armor so the 10 attack lands for 5.
        state.hero.equipment.armor = None;
        let rng = FixedRng::rolling(100);
        let env = Env::with_all(
            &fixtures.items,
            &fixtures.skills,
            &fixtures.passives,
            &fixtures.monsters,
            &rng,
            &fixtures.config,
        )
        .into_battle_env();

        let events = MonsterAttackAction.apply(&mut state, &env).unwrap();

        assert_eq!(
            events,
            vec![
                BattleEvent::DamageDealt {
                    target: Side::Hero,
                    amount: 5,
                    critical: false,
                },
                BattleEvent::Retaliated { amount: 1 },
            ]
        );
        assert_eq!(state.monster.health.current(), 49);
    }

    #[test]
    fn fully_mitigated_hit_returns_no_retaliation() {
        let (mut state, fixtures) = testkit::battle();
        state.hero.passives.learn(testkit::THORN_HIDE);

        let events = MonsterAttackAction
            .apply(&mut state, &fixtures.env())
            .unwrap();

        assert_eq!(events.len(), 1);
        assert!(state.monster.health.is_full());
    }
}
