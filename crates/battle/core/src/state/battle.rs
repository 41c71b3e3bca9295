//! The battle container and its lifecycle.

use super::types::{Hero, Monster};

/// Where the turn sequencer currently stands.
///
/// The two terminal phases are absorbing: once entered, the battle accepts
/// no further actions. The three mid-cycle phases are only ever observed
/// transiently while the engine resolves a cycle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattlePhase {
    /// Waiting for the next hero action.
    AwaitingHeroAction,
    /// A hero action is being applied.
    ResolvingHeroAction,
    /// Checking whether the hero's action felled the monster.
    CheckMonsterAlive,
    /// The monster takes its basic attack.
    MonsterActs,
    /// Checking whether the hero survived the cycle.
    CheckHeroAlive,
    /// Terminal: the monster fell.
    BattleWon,
    /// Terminal: the hero fell or fled.
    BattleLost,
}

impl BattlePhase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::BattleWon | Self::BattleLost)
    }
}

/// Per-battle bookkeeping that is not combatant state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    /// Seed all of this battle's rolls derive from.
    pub seed: u64,
    /// Completed-cycle counter, starting at 0. Mixed into roll seeds.
    pub cycle: u64,
    /// Whether the current cycle's start-of-cycle work (buff tick, per-turn
    /// passives) has already run. Keeps rejected actions and inventory
    /// suspensions from running it twice.
    pub cycle_primed: bool,
    /// Whether the revive passive has fired this battle.
    pub revive_spent: bool,
    /// Whether the frost aura opener is still pending. Armed at battle
    /// start, disarmed when the first cycle begins.
    pub frost_armed: bool,
}

impl SessionState {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            cycle: 0,
            cycle_primed: false,
            revive_spent: false,
            frost_armed: true,
        }
    }
}

/// Full state of one battle: both combatants plus sequencing bookkeeping.
///
/// The battle owns the hero for its duration; no other component holds a
/// competing reference. [`BattleState::into_hero`] releases them at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub hero: Hero,
    pub monster: Monster,
    pub phase: BattlePhase,
    pub session: SessionState,
}

impl BattleState {
    /// Opens a battle: the hero versus a freshly spawned monster.
    pub fn new(hero: Hero, monster: Monster, seed: u64) -> Self {
        Self {
            hero,
            monster,
            phase: BattlePhase::AwaitingHeroAction,
            session: SessionState::new(seed),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Releases the hero once the battle is over, clearing battle-scoped
    /// state so buffs never leak into the next encounter.
    pub fn into_hero(mut self) -> Hero {
        self.hero.buffs.clear();
        self.hero
    }
}
