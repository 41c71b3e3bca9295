//! Victory rewards: experience, levels, gold, and loot.

mod advancement;
mod level;

pub use advancement::{AdvancementError, AdvancementOffer, apply_offer, generate_offers};
pub use level::grant_experience;

use arrayvec::ArrayVec;

use crate::combat::hero_has;
use crate::config::BattleConfig;
use crate::env::{BattleEnv, OracleError, PassiveKind, compute_seed, context};
use crate::events::BattleEvent;
use crate::state::{BattleState, ItemId, Side};

/// One granted loot stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootGrant {
    pub item: ItemId,
    pub quantity: u16,
}

/// Everything one victory paid out, in resolution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryRewards {
    /// Experience credited, boost included.
    pub experience: u32,
    /// The level reached, when the award crossed the threshold.
    pub new_level: Option<u32>,
    /// Gold credited, boost included.
    pub gold: u32,
    /// Loot stacks that actually entered the inventory.
    pub loot: ArrayVec<LootGrant, { BattleConfig::MAX_LOOT_RULES }>,
}

/// Resolves the payout for the monster the hero just felled.
///
/// Experience lands first so the gold and loot rolls of a replayed battle
/// see the same hero either way. The gold draw spans
/// `[reward/10, reward/5]` of the unboosted experience reward; each loot
/// rule rolls its drop chance and quantity independently. Loot that does
/// not fit the inventory is dropped without an event.
pub fn resolve_victory(
    state: &mut BattleState,
    env: &BattleEnv<'_>,
) -> Result<(VictoryRewards, Vec<BattleEvent>), OracleError> {
    let config = env.config()?;
    let rng = env.rng()?;
    let passives = env.passives()?;
    let definition = env
        .monsters()?
        .definition(state.monster.id)
        .ok_or(OracleError::MonsterNotFound(state.monster.id))?;

    let mut rewards = VictoryRewards::default();
    let mut events = Vec::new();
    let base_reward = definition.experience_reward;

    let mut experience = base_reward;
    if hero_has(&state.hero, passives, PassiveKind::ExperienceBoost)? {
        experience = boosted(experience, config.experience_boost_percent);
    }
    rewards.experience = experience;
    events.push(BattleEvent::ExperienceGained { amount: experience });

    rewards.new_level = grant_experience(&mut state.hero, experience, config);
    if let Some(level) = rewards.new_level {
        events.push(BattleEvent::LevelUp { level });
    }

    let gold_seed = compute_seed(
        state.session.seed,
        state.session.cycle,
        Side::Monster,
        context::GOLD,
    );
    let mut gold = rng.range(gold_seed, base_reward / 10, base_reward / 5);
    if hero_has(&state.hero, passives, PassiveKind::GoldBoost)? {
        gold = boosted(gold, config.gold_boost_percent);
    }
    rewards.gold = gold;
    state.hero.gold = state.hero.gold.saturating_add(gold);
    events.push(BattleEvent::GoldGained { amount: gold });

    for (index, rule) in definition.loot.iter().enumerate() {
        let chance_seed = compute_seed(
            state.session.seed,
            state.session.cycle,
            Side::Monster,
            context::LOOT_CHANCE_BASE + 2 * index as u32,
        );
        if rng.roll_d100(chance_seed) > rule.chance_percent {
            continue;
        }

        let quantity_seed = compute_seed(
            state.session.seed,
            state.session.cycle,
            Side::Monster,
            context::LOOT_QUANTITY_BASE + 2 * index as u32,
        );
        let quantity = rng.range(
            quantity_seed,
            u32::from(rule.min_quantity),
            u32::from(rule.max_quantity),
        ) as u16;

        if state.hero.inventory.add(rule.item, quantity) {
            rewards.loot.push(LootGrant {
                item: rule.item,
                quantity,
            });
            events.push(BattleEvent::LootDropped {
                item: rule.item,
                quantity,
            });
        }
    }

    Ok((rewards, events))
}

fn boosted(amount: u32, percent: u32) -> u32 {
    let total = u64::from(amount) + u64::from(amount) * u64::from(percent) / 100;
    total.min(u64::from(u32::MAX)) as u32
}
