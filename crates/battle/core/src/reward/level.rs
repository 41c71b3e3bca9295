//! Experience accrual and level progression.

use crate::config::BattleConfig;
use crate::state::Hero;

/// Credits experience to the hero, applying at most one level-up per award.
///
/// Crossing the threshold raises the level, resets accumulated experience
/// to zero, grows the threshold by half (floored), adds the flat stat
/// bonuses, and fully restores health and mana. Returns the level reached,
/// if any.
pub fn grant_experience(hero: &mut Hero, amount: u32, config: &BattleConfig) -> Option<u32> {
    hero.experience = hero.experience.saturating_add(amount);
    if hero.experience < hero.experience_to_next {
        return None;
    }

    hero.level += 1;
    hero.experience = 0;
    hero.experience_to_next = grow_threshold(hero.experience_to_next, config);

    hero.health.raise_maximum(config.level_health_bonus);
    hero.mana.raise_maximum(config.level_mana_bonus);
    hero.health.refill();
    hero.mana.refill();
    hero.attack = hero.attack.saturating_add(config.level_attack_bonus);
    hero.defense = hero.defense.saturating_add(config.level_defense_bonus);

    Some(hero.level)
}

fn grow_threshold(threshold: u32, config: &BattleConfig) -> u32 {
    let grown = u64::from(threshold) * u64::from(config.threshold_growth_percent) / 100;
    grown.min(u64::from(u32::MAX)) as u32
}
