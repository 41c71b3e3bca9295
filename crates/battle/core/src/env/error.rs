//! Errors for oracle access failures.

use crate::error::{BattleError, ErrorSeverity};
use crate::state::{ItemId, MonsterId, PassiveId, SkillId};

/// Errors raised when required oracles are missing or lookups fail.
///
/// Missing oracles are fatal: the engine cannot resolve a battle without its
/// catalogs and randomness source. Failed lookups are validation errors: the
/// reference itself is bad, not the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("item oracle not available")]
    ItemsNotAvailable,

    #[error("skill oracle not available")]
    SkillsNotAvailable,

    #[error("passive oracle not available")]
    PassivesNotAvailable,

    #[error("monster oracle not available")]
    MonstersNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,

    #[error("battle config not available")]
    ConfigNotAvailable,

    #[error("{0} not found in the item catalog")]
    ItemNotFound(ItemId),

    #[error("{0} not found in the skill catalog")]
    SkillNotFound(SkillId),

    #[error("{0} not found in the passive catalog")]
    PassiveNotFound(PassiveId),

    #[error("{0} not found in the monster catalog")]
    MonsterNotFound(MonsterId),
}

impl BattleError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemsNotAvailable
            | Self::SkillsNotAvailable
            | Self::PassivesNotAvailable
            | Self::MonstersNotAvailable
            | Self::RngNotAvailable
            | Self::ConfigNotAvailable => ErrorSeverity::Fatal,
            Self::ItemNotFound(_)
            | Self::SkillNotFound(_)
            | Self::PassiveNotFound(_)
            | Self::MonsterNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemsNotAvailable => "ITEMS_NOT_AVAILABLE",
            Self::SkillsNotAvailable => "SKILLS_NOT_AVAILABLE",
            Self::PassivesNotAvailable => "PASSIVES_NOT_AVAILABLE",
            Self::MonstersNotAvailable => "MONSTERS_NOT_AVAILABLE",
            Self::RngNotAvailable => "RNG_NOT_AVAILABLE",
            Self::ConfigNotAvailable => "CONFIG_NOT_AVAILABLE",
            Self::ItemNotFound(_) => "ITEM_NOT_FOUND",
            Self::SkillNotFound(_) => "SKILL_NOT_FOUND",
            Self::PassiveNotFound(_) => "PASSIVE_NOT_FOUND",
            Self::MonsterNotFound(_) => "MONSTER_NOT_FOUND",
        }
    }
}
