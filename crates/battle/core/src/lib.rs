//! Deterministic battle resolution logic and data types.
//!
//! `battle-core` defines the canonical combat rules: stat totals, the skill
//! effect catalog, the buff ledger, passive triggers, the turn sequencer,
//! and the victory payout. All state mutation flows through
//! [`engine::BattleEngine`]; catalogs and randomness reach the engine only
//! through the read-only oracle traits in [`env`], so a battle replays
//! exactly from its seed. Supporting crates depend on the types re-exported
//! here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod reward;
pub mod state;
pub mod stats;

#[cfg(test)]
mod testkit;

pub use action::{
    ActionTransition, BasicAttackAction, HeroAction, MonsterAttackAction, PotionError,
    SkillError, UsePotionAction, UseSkillAction,
};
pub use config::BattleConfig;
pub use engine::{
    BattleEngine, CycleFlow, ExecuteError, ExecutionOutcome, TransitionPhase, TransitionPhaseError,
};
pub use env::{
    BattleEnv, Env, ItemDefinition, ItemKind, ItemOracle, LootRule, MonsterDefinition,
    MonsterOracle, OracleError, PassiveDefinition, PassiveKind, PassiveOracle, PcgRng, Rarity,
    RngOracle, SkillDefinition, SkillKind, SkillOracle, SkillPower, compute_seed, context,
};
pub use error::{BattleError, ErrorContext, ErrorSeverity};
pub use events::BattleEvent;
pub use reward::{
    AdvancementError, AdvancementOffer, LootGrant, VictoryRewards, apply_offer, generate_offers,
    grant_experience, resolve_victory,
};
pub use state::{
    BattlePhase, BattleState, Buff, BuffLedger, EquipError, Equipment, Hero, Inventory,
    InventorySlot, ItemId, Monster, MonsterId, PassiveId, PassiveSet, SessionState, Side, SkillId,
    SkillSlot, SkillSlots, TradeError,
};
pub use stats::{ResourcePool, StatTotals};
