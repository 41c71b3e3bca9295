//! Structured turn-result events.

use crate::state::{ItemId, Side, SkillId};

/// One observable thing that happened during battle resolution.
///
/// The engine never renders anything; it reports what happened through
/// these and an external presenter decides what to say. Amounts are always
/// the values that actually landed after clamping, so a report can be
/// relayed verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattleEvent {
    /// A new cycle began: buffs ticked, per-cycle passives ran.
    CycleStarted { cycle: u64 },
    /// Frost aura permanently lowered the monster's attack.
    MonsterWeakened { amount: u32 },
    /// The regeneration passive restored health.
    HealthRegenerated { amount: u32 },
    /// The mana regeneration passive restored mana.
    ManaRegenerated { amount: u32 },
    /// The hero cast a skill; its effects follow as separate events.
    SkillUsed { skill: SkillId },
    /// A hit landed for `amount` after mitigation and clamping.
    DamageDealt {
        target: Side,
        amount: u32,
        critical: bool,
    },
    /// The hero evaded the monster's attack outright.
    AttackDodged,
    /// A healing effect restored health.
    HealingReceived { amount: u32 },
    /// A drain cast cost the hero health up front.
    HealthSacrificed { amount: u32 },
    /// A timed stat modifier was granted to the hero.
    BuffApplied { attack: i32, defense: i32, turns: u8 },
    /// A risky blast rebounded onto the hero, bypassing defense.
    RecoilTaken { amount: u32 },
    /// The retaliation passive returned damage to the monster.
    Retaliated { amount: u32 },
    /// A potion was drunk.
    PotionConsumed { restored: u32 },
    /// The revive passive brought the hero back from a killing blow.
    HeroRevived { health: u32 },
    /// The hero fled; the battle ends as a loss.
    HeroFled,
    /// The monster fell; the battle ends as a win.
    MonsterSlain,
    /// The hero fell with no revive left; the battle ends as a loss.
    HeroDowned,
    /// Victory experience, boosts included.
    ExperienceGained { amount: u32 },
    /// The experience threshold was crossed.
    LevelUp { level: u32 },
    /// Victory gold, boosts included.
    GoldGained { amount: u32 },
    /// A loot rule paid out.
    LootDropped { item: ItemId, quantity: u16 },
}
