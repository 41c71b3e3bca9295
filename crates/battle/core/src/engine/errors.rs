//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, BasicAttackAction, MonsterAttackAction, UsePotionAction, UseSkillAction,
};
use crate::env::OracleError;
use crate::error::{BattleError, ErrorContext, ErrorSeverity};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: core::fmt::Display + core::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while driving a battle cycle through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("basic attack failed: {0}")]
    Attack(TransitionPhaseError<<BasicAttackAction as ActionTransition>::Error>),

    #[error("skill cast failed: {0}")]
    Skill(TransitionPhaseError<<UseSkillAction as ActionTransition>::Error>),

    #[error("potion use failed: {0}")]
    Potion(TransitionPhaseError<<UsePotionAction as ActionTransition>::Error>),

    #[error("monster attack failed: {0}")]
    MonsterAttack(TransitionPhaseError<<MonsterAttackAction as ActionTransition>::Error>),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("battle is already over")]
    BattleAlreadyOver,

    #[error("cycle {cycle} has not been primed: call begin_cycle first")]
    CycleNotPrimed { cycle: u64 },

    #[error(
        "invariant violation at cycle {}: {}",
        context.cycle,
        context.message.unwrap_or("unspecified")
    )]
    InvariantViolation { context: ErrorContext },
}

impl BattleError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Attack(inner) => inner.error.severity(),
            Self::Skill(inner) => inner.error.severity(),
            Self::Potion(inner) => inner.error.severity(),
            Self::MonsterAttack(inner) => inner.error.severity(),
            Self::Oracle(inner) => inner.severity(),
            Self::BattleAlreadyOver => ErrorSeverity::Validation,
            Self::CycleNotPrimed { .. } => ErrorSeverity::Internal,
            Self::InvariantViolation { .. } => ErrorSeverity::Fatal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::InvariantViolation { context } => Some(context),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Attack(inner) => inner.error.error_code(),
            Self::Skill(inner) => inner.error.error_code(),
            Self::Potion(inner) => inner.error.error_code(),
            Self::MonsterAttack(inner) => inner.error.error_code(),
            Self::Oracle(inner) => inner.error_code(),
            Self::BattleAlreadyOver => "BATTLE_ALREADY_OVER",
            Self::CycleNotPrimed { .. } => "CYCLE_NOT_PRIMED",
            Self::InvariantViolation { .. } => "INVARIANT_VIOLATION",
        }
    }
}
