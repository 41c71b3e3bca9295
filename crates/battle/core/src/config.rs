/// Battle configuration constants and tunable balance parameters.
///
/// Serialized configs may name only the rates they change; everything else
/// falls back to the defaults below.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Chance (d100, percent) for a basic attack to strike critically.
    /// Applies to both hero and monster basic attacks; skills never crit.
    pub crit_chance_percent: u32,
    /// Chance (percent) for a hero with the dodge passive to fully evade a hit.
    pub dodge_chance_percent: u32,
    /// Chance (percent) that a risky blast rebounds onto the caster.
    pub recoil_chance_percent: u32,
    /// Unmitigated self-damage taken when a risky blast rebounds.
    pub recoil_damage: u32,
    /// Health a drain caster sacrifices up front, before any healing back.
    pub drain_self_cost: u32,
    /// Health restored by one potion, capped by missing health.
    pub potion_heal: u32,
    /// Health restored each cycle by the regeneration passive.
    pub regen_health_per_cycle: u32,
    /// Mana restored each cycle by the mana regeneration passive.
    pub regen_mana_per_cycle: u32,
    /// Flat attack removed from the monster by the frost aura passive.
    pub frost_aura_reduction: u32,
    /// Percent of damage actually taken that is returned by retaliation.
    pub retaliation_percent: u32,
    /// Percent of max health restored when the revive passive fires.
    pub revive_health_percent: u32,
    /// Percent bonus experience granted by the experience-boost passive.
    pub experience_boost_percent: u32,
    /// Percent bonus gold granted by the gold-boost passive.
    pub gold_boost_percent: u32,
    /// Percent growth of the experience threshold on level-up (150 = x1.5).
    pub threshold_growth_percent: u32,
    /// Max health gained per level.
    pub level_health_bonus: u32,
    /// Max mana gained per level.
    pub level_mana_bonus: u32,
    /// Base attack gained per level.
    pub level_attack_bonus: u32,
    /// Base defense gained per level.
    pub level_defense_bonus: u32,
    /// Shop purchase price multiplier over an item's base value.
    pub price_markup: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_ACTIVE_BUFFS: usize = 16;
    pub const MAX_SKILL_SLOTS: usize = 12;
    pub const MAX_PASSIVES: usize = 8;
    pub const MAX_INVENTORY_SLOTS: usize = 16;
    pub const MAX_LOOT_RULES: usize = 4;
    pub const MAX_ADVANCEMENT_OFFERS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CRIT_CHANCE_PERCENT: u32 = 15;
    pub const DEFAULT_DODGE_CHANCE_PERCENT: u32 = 25;
    pub const DEFAULT_RECOIL_CHANCE_PERCENT: u32 = 50;
    pub const DEFAULT_RECOIL_DAMAGE: u32 = 15;
    pub const DEFAULT_DRAIN_SELF_COST: u32 = 10;
    pub const DEFAULT_POTION_HEAL: u32 = 50;
    pub const DEFAULT_REGEN_HEALTH_PER_CYCLE: u32 = 2;
    pub const DEFAULT_REGEN_MANA_PER_CYCLE: u32 = 2;
    pub const DEFAULT_FROST_AURA_REDUCTION: u32 = 2;
    pub const DEFAULT_RETALIATION_PERCENT: u32 = 20;
    pub const DEFAULT_REVIVE_HEALTH_PERCENT: u32 = 30;
    pub const DEFAULT_EXPERIENCE_BOOST_PERCENT: u32 = 20;
    pub const DEFAULT_GOLD_BOOST_PERCENT: u32 = 20;
    pub const DEFAULT_THRESHOLD_GROWTH_PERCENT: u32 = 150;
    pub const DEFAULT_LEVEL_HEALTH_BONUS: u32 = 20;
    pub const DEFAULT_LEVEL_MANA_BONUS: u32 = 10;
    pub const DEFAULT_LEVEL_ATTACK_BONUS: u32 = 3;
    pub const DEFAULT_LEVEL_DEFENSE_BONUS: u32 = 2;
    pub const DEFAULT_PRICE_MARKUP: u32 = 2;

    pub fn new() -> Self {
        Self {
            crit_chance_percent: Self::DEFAULT_CRIT_CHANCE_PERCENT,
            dodge_chance_percent: Self::DEFAULT_DODGE_CHANCE_PERCENT,
            recoil_chance_percent: Self::DEFAULT_RECOIL_CHANCE_PERCENT,
            recoil_damage: Self::DEFAULT_RECOIL_DAMAGE,
            drain_self_cost: Self::DEFAULT_DRAIN_SELF_COST,
            potion_heal: Self::DEFAULT_POTION_HEAL,
            regen_health_per_cycle: Self::DEFAULT_REGEN_HEALTH_PER_CYCLE,
            regen_mana_per_cycle: Self::DEFAULT_REGEN_MANA_PER_CYCLE,
            frost_aura_reduction: Self::DEFAULT_FROST_AURA_REDUCTION,
            retaliation_percent: Self::DEFAULT_RETALIATION_PERCENT,
            revive_health_percent: Self::DEFAULT_REVIVE_HEALTH_PERCENT,
            experience_boost_percent: Self::DEFAULT_EXPERIENCE_BOOST_PERCENT,
            gold_boost_percent: Self::DEFAULT_GOLD_BOOST_PERCENT,
            threshold_growth_percent: Self::DEFAULT_THRESHOLD_GROWTH_PERCENT,
            level_health_bonus: Self::DEFAULT_LEVEL_HEALTH_BONUS,
            level_mana_bonus: Self::DEFAULT_LEVEL_MANA_BONUS,
            level_attack_bonus: Self::DEFAULT_LEVEL_ATTACK_BONUS,
            level_defense_bonus: Self::DEFAULT_LEVEL_DEFENSE_BONUS,
            price_markup: Self::DEFAULT_PRICE_MARKUP,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
