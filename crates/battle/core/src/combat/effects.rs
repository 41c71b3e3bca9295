//! Skill effect resolution.
//!
//! Every skill kind resolves through the single exhaustive match in
//! [`resolve_skill`]. Catalog data picks names, costs, and power numbers;
//! the shapes of the effects themselves are fixed here.

use super::damage::mitigate;
use crate::env::{
    BattleEnv, OracleError, SkillDefinition, SkillKind, SkillPower, compute_seed, context,
};
use crate::events::BattleEvent;
use crate::state::{BattleState, Buff, Side};
use crate::stats::StatTotals;

// Buff shapes are part of the effect catalog, not per-skill data.
const DEFENSE_BUFF: Buff = Buff::new(0, 5, 3);
const BERSERK_BUFF: Buff = Buff::new(7, -5, 3);
const ICE_WALL_BUFF: Buff = Buff::new(-5, 10, 2);
const LIGHTNING_SELF_DEBUFF: Buff = Buff::new(0, -2, 1);

/// Resolves one cast against the battle state, returning the events it
/// produced in order.
///
/// Mana is the caller's concern; resolution starts at the effect. A cast
/// that drops the hero's own health to zero does not end the battle here:
/// death checks belong to the turn sequencer.
pub fn resolve_skill(
    state: &mut BattleState,
    env: &BattleEnv<'_>,
    definition: &SkillDefinition,
) -> Result<Vec<BattleEvent>, OracleError> {
    let mut events = Vec::new();

    match definition.kind {
        SkillKind::Damage | SkillKind::MagicDamage => {
            let amount = strike(state, env, definition.power)?;
            events.push(BattleEvent::DamageDealt {
                target: Side::Monster,
                amount,
                critical: false,
            });
        }
        SkillKind::Heal => {
            let amount = raw_power(state, env, definition.power)?.max(0) as u32;
            let restored = state.hero.health.restore(amount);
            events.push(BattleEvent::HealingReceived { amount: restored });
        }
        SkillKind::MultiHit => {
            // Two full hits, each mitigated and clamped on its own; the
            // report carries their sum.
            let first = strike(state, env, definition.power)?;
            let second = strike(state, env, definition.power)?;
            events.push(BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: first + second,
                critical: false,
            });
        }
        SkillKind::BuffDefense => {
            if state.hero.buffs.add(DEFENSE_BUFF) {
                events.push(buff_event(DEFENSE_BUFF));
            }
        }
        SkillKind::Berserk => {
            if state.hero.buffs.add(BERSERK_BUFF) {
                events.push(buff_event(BERSERK_BUFF));
            }
        }
        SkillKind::Drain => {
            let config = env.config()?;
            let sacrificed = state.hero.health.deplete(config.drain_self_cost);
            events.push(BattleEvent::HealthSacrificed {
                amount: sacrificed,
            });
            let dealt = strike(state, env, definition.power)?;
            events.push(BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: dealt,
                critical: false,
            });
            let healed = state.hero.health.restore(dealt);
            events.push(BattleEvent::HealingReceived { amount: healed });
        }
        SkillKind::RiskyBlast => {
            let dealt = strike(state, env, definition.power)?;
            events.push(BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: dealt,
                critical: false,
            });
            let config = env.config()?;
            let seed = compute_seed(
                state.session.seed,
                state.session.cycle,
                Side::Hero,
                context::RECOIL,
            );
            if env.rng()?.roll_d100(seed) <= config.recoil_chance_percent {
                // Recoil bypasses defense entirely.
                let taken = state.hero.health.deplete(config.recoil_damage);
                events.push(BattleEvent::RecoilTaken { amount: taken });
            }
        }
        SkillKind::IceWall => {
            if state.hero.buffs.add(ICE_WALL_BUFF) {
                events.push(buff_event(ICE_WALL_BUFF));
            }
        }
        SkillKind::LightningChain => {
            let dealt = strike(state, env, definition.power)?;
            events.push(BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: dealt,
                critical: false,
            });
            if state.hero.buffs.add(LIGHTNING_SELF_DEBUFF) {
                events.push(buff_event(LIGHTNING_SELF_DEBUFF));
            }
        }
    }

    Ok(events)
}

/// Reads a skill's power as a signed raw magnitude.
fn raw_power(
    state: &BattleState,
    env: &BattleEnv<'_>,
    power: SkillPower,
) -> Result<i64, OracleError> {
    Ok(match power {
        SkillPower::Flat(value) => value as i64,
        SkillPower::Scaled(percent) => {
            let totals = StatTotals::of_hero(&state.hero, env.items()?)?;
            totals.attack as i64 * percent as i64 / 100
        }
    })
}

/// One defense-mitigated hit on the monster. Returns the damage actually
/// dealt after clamping to remaining health.
fn strike(
    state: &mut BattleState,
    env: &BattleEnv<'_>,
    power: SkillPower,
) -> Result<u32, OracleError> {
    let raw = raw_power(state, env, power)?;
    let defense = StatTotals::of_monster(&state.monster).defense as i64;
    let planned = mitigate(raw, defense);
    Ok(state.monster.health.deplete(planned))
}

fn buff_event(buff: Buff) -> BattleEvent {
    BattleEvent::BuffApplied {
        attack: buff.attack,
        defense: buff.defense,
        turns: buff.turns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;
    use crate::state::ItemId;
    use crate::testkit::{self, FixedRng};

    #[test]
    fn scaled_damage_floors_then_mitigates() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        // Attack total 15, power 150% -> floor(22.5) = 22, minus 2 defense.
        let events =
            resolve_skill(&mut state, &env, fixtures.skills.by_kind(SkillKind::Damage)).unwrap();
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 20,
                critical: false
            }]
        );
        assert_eq!(state.monster.health.current(), 30);
    }

    #[test]
    fn flat_damage_ignores_attack_totals() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        // Power 30 flat, minus 2 defense.
        let events = resolve_skill(
            &mut state,
            &env,
            fixtures.skills.by_kind(SkillKind::MagicDamage),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 28,
                critical: false
            }]
        );
    }

    #[test]
    fn heal_caps_at_max_health() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        state.hero.health = crate::stats::ResourcePool::with_current(70, 100);
        // Heal 40 against 30 missing.
        let events =
            resolve_skill(&mut state, &env, fixtures.skills.by_kind(SkillKind::Heal)).unwrap();
        assert_eq!(events, vec![BattleEvent::HealingReceived { amount: 30 }]);
        assert!(state.hero.health.is_full());
    }

    #[test]
    fn multi_hit_reports_the_sum_of_clamped_hits() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        // Attack total 15, power 70% -> floor(10.5) = 10, minus 2 defense
        // per hit.
        let events = resolve_skill(
            &mut state,
            &env,
            fixtures.skills.by_kind(SkillKind::MultiHit),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 16,
                critical: false
            }]
        );
        assert_eq!(state.monster.health.current(), 34);

        // Near death the second hit clamps to what is left.
        state.monster.health = crate::stats::ResourcePool::with_current(9, 50);
        let events = resolve_skill(
            &mut state,
            &env,
            fixtures.skills.by_kind(SkillKind::MultiHit),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 9,
                critical: false
            }]
        );
        assert!(state.monster.health.is_empty());
    }

    #[test]
    fn drain_sacrifices_strikes_then_heals_back() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        state.hero.health = crate::stats::ResourcePool::with_current(50, 100);
        state.monster.defense = 0;
        // Sacrifice 10, deal 20 flat, heal the 20 dealt.
        let events =
            resolve_skill(&mut state, &env, fixtures.skills.by_kind(SkillKind::Drain)).unwrap();
        assert_eq!(
            events,
            vec![
                BattleEvent::HealthSacrificed { amount: 10 },
                BattleEvent::DamageDealt {
                    target: Side::Monster,
                    amount: 20,
                    critical: false
                },
                BattleEvent::HealingReceived { amount: 20 },
            ]
        );
        assert_eq!(state.hero.health.current(), 60);
        assert_eq!(state.monster.health.current(), 30);
    }

    #[test]
    fn drain_heals_only_damage_actually_dealt() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        state.hero.health = crate::stats::ResourcePool::with_current(50, 100);
        state.monster.defense = 0;
        state.monster.health = crate::stats::ResourcePool::with_current(7, 50);
        let events =
            resolve_skill(&mut state, &env, fixtures.skills.by_kind(SkillKind::Drain)).unwrap();
        assert_eq!(
            events[1],
            BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 7,
                critical: false
            }
        );
        assert_eq!(events[2], BattleEvent::HealingReceived { amount: 7 });
        assert_eq!(state.hero.health.current(), 47);
    }

    #[test]
    fn risky_blast_recoil_bypasses_defense() {
        let (mut state, fixtures) = testkit::battle();
        // A roll of 1 is under the 50 percent recoil chance.
        let rng = FixedRng::rolling(1);
        let env = Env::with_all(
            &fixtures.items,
            &fixtures.skills,
            &fixtures.passives,
            &fixtures.monsters,
            &rng,
            &fixtures.config,
        )
        .into_battle_env();
        let events = resolve_skill(
            &mut state,
            &env,
            fixtures.skills.by_kind(SkillKind::RiskyBlast),
        )
        .unwrap();
        // 40 flat minus 2 defense, then 15 recoil ignoring the hero's 10
        // defense total.
        assert_eq!(
            events,
            vec![
                BattleEvent::DamageDealt {
                    target: Side::Monster,
                    amount: 38,
                    critical: false
                },
                BattleEvent::RecoilTaken { amount: 15 },
            ]
        );
        assert_eq!(state.hero.health.current(), 85);
    }

    #[test]
    fn risky_blast_can_miss_the_recoil() {
        let (mut state, fixtures) = testkit::battle();
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
        let events = resolve_skill(
            &mut state,
            &env,
            fixtures.skills.by_kind(SkillKind::RiskyBlast),
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        assert!(state.hero.health.is_full());
    }

    #[test]
    fn buff_kinds_land_in_the_ledger() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        resolve_skill(&mut state, &env, fixtures.skills.by_kind(SkillKind::Berserk)).unwrap();
        resolve_skill(&mut state, &env, fixtures.skills.by_kind(SkillKind::IceWall)).unwrap();
        assert_eq!(state.hero.buffs.attack_delta(), 2);
        assert_eq!(state.hero.buffs.defense_delta(), 5);
    }

    #[test]
    fn lightning_chain_debuffs_the_caster() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        let events = resolve_skill(
            &mut state,
            &env,
            fixtures.skills.by_kind(SkillKind::LightningChain),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![
                BattleEvent::DamageDealt {
                    target: Side::Monster,
                    amount: 23,
                    critical: false
                },
                BattleEvent::BuffApplied {
                    attack: 0,
                    defense: -2,
                    turns: 1
                },
            ]
        );
        assert_eq!(state.hero.buffs.defense_delta(), -2);
    }

    #[test]
    fn damage_reports_never_exceed_remaining_health() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        state.monster.health = crate::stats::ResourcePool::with_current(4, 50);
        let events = resolve_skill(
            &mut state,
            &env,
            fixtures.skills.by_kind(SkillKind::MagicDamage),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![BattleEvent::DamageDealt {
                target: Side::Monster,
                amount: 4,
                critical: false
            }]
        );
        assert!(state.monster.health.is_empty());
    }

    #[test]
    fn missing_equipment_definition_surfaces_as_oracle_error() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        state.hero.equipment.weapon = Some(ItemId(999));
        let result = resolve_skill(&mut state, &env, fixtures.skills.by_kind(SkillKind::Damage));
        assert_eq!(result, Err(OracleError::ItemNotFound(ItemId(999))));
    }
}
