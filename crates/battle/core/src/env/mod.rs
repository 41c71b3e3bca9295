//! Traits describing read-only battle data.
//!
//! Oracles expose the immutable catalogs (items, skills, passives,
//! monsters) and the deterministic randomness source. The [`Env`] aggregate
//! bundles them so the engine can reach everything it needs without hard
//! coupling to concrete implementations.

mod error;
mod items;
mod monsters;
mod passives;
mod rng;
mod skills;

pub use error::OracleError;
pub use items::{ItemDefinition, ItemKind, ItemOracle};
pub use monsters::{LootRule, MonsterDefinition, MonsterOracle};
pub use passives::{PassiveDefinition, PassiveKind, PassiveOracle, Rarity};
pub use rng::{PcgRng, RngOracle, compute_seed, context};
pub use skills::{SkillDefinition, SkillKind, SkillOracle, SkillPower};

use crate::config::BattleConfig;

/// Aggregates the read-only oracles required by the engine and reward
/// resolver. Balance tuning rides along as a plain config reference.
pub struct Env<'a, I, S, P, M, R>
where
    I: ItemOracle + ?Sized,
    S: SkillOracle + ?Sized,
    P: PassiveOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    items: Option<&'a I>,
    skills: Option<&'a S>,
    passives: Option<&'a P>,
    monsters: Option<&'a M>,
    rng: Option<&'a R>,
    config: Option<&'a BattleConfig>,
}

// Manual impls: a bundle of shared references copies even when the oracle
// types behind them are unsized, which derived bounds would forbid.
impl<'a, I, S, P, M, R> Clone for Env<'a, I, S, P, M, R>
where
    I: ItemOracle + ?Sized,
    S: SkillOracle + ?Sized,
    P: PassiveOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, I, S, P, M, R> Copy for Env<'a, I, S, P, M, R>
where
    I: ItemOracle + ?Sized,
    S: SkillOracle + ?Sized,
    P: PassiveOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type BattleEnv<'a> = Env<
    'a,
    dyn ItemOracle + 'a,
    dyn SkillOracle + 'a,
    dyn PassiveOracle + 'a,
    dyn MonsterOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, I, S, P, M, R> Env<'a, I, S, P, M, R>
where
    I: ItemOracle + ?Sized,
    S: SkillOracle + ?Sized,
    P: PassiveOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        items: Option<&'a I>,
        skills: Option<&'a S>,
        passives: Option<&'a P>,
        monsters: Option<&'a M>,
        rng: Option<&'a R>,
        config: Option<&'a BattleConfig>,
    ) -> Self {
        Self {
            items,
            skills,
            passives,
            monsters,
            rng,
            config,
        }
    }

    pub fn with_all(
        items: &'a I,
        skills: &'a S,
        passives: &'a P,
        monsters: &'a M,
        rng: &'a R,
        config: &'a BattleConfig,
    ) -> Self {
        Self::new(
            Some(items),
            Some(skills),
            Some(passives),
            Some(monsters),
            Some(rng),
            Some(config),
        )
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            skills: None,
            passives: None,
            monsters: None,
            rng: None,
            config: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a S, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Returns the PassiveOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PassivesNotAvailable` if no passive oracle was provided.
    pub fn passives(&self) -> Result<&'a P, OracleError> {
        self.passives.ok_or(OracleError::PassivesNotAvailable)
    }

    /// Returns the MonsterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MonstersNotAvailable` if no monster oracle was provided.
    pub fn monsters(&self) -> Result<&'a M, OracleError> {
        self.monsters.ok_or(OracleError::MonstersNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the battle config, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config was provided.
    pub fn config(&self) -> Result<&'a BattleConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<'a, I, S, P, M, R> Env<'a, I, S, P, M, R>
where
    I: ItemOracle + 'a,
    S: SkillOracle + 'a,
    P: PassiveOracle + 'a,
    M: MonsterOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `BattleEnv`
    /// (consumes self).
    ///
    /// Use this when you need to convert once and don't need the original
    /// `Env` anymore.
    pub fn into_battle_env(self) -> BattleEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let skills: Option<&'a dyn SkillOracle> = self.skills.map(|skills| skills as _);
        let passives: Option<&'a dyn PassiveOracle> = self.passives.map(|passives| passives as _);
        let monsters: Option<&'a dyn MonsterOracle> = self.monsters.map(|monsters| monsters as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(items, skills, passives, monsters, rng, self.config)
    }

    /// Converts this environment into a trait-object based `BattleEnv`
    /// (borrows self).
    ///
    /// Use this when you need to convert multiple times (e.g., in a loop).
    pub fn as_battle_env(&self) -> BattleEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let skills: Option<&'a dyn SkillOracle> = self.skills.map(|skills| skills as _);
        let passives: Option<&'a dyn PassiveOracle> = self.passives.map(|passives| passives as _);
        let monsters: Option<&'a dyn MonsterOracle> = self.monsters.map(|monsters| monsters as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(items, skills, passives, monsters, rng, self.config)
    }
}
