//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine aborts, oracle failures, and provider exhaustion so drivers
//! can bubble them up with consistent context.
use battle_core::{AdvancementError, ExecuteError, MonsterId, OracleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The engine refused in a way no further action can fix: an internal
    /// inconsistency or a corrupted battle state. Recoverable rejections
    /// never reach this variant; the session re-prompts on those.
    #[error("battle aborted: {0}")]
    Engine(#[source] ExecuteError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("advancement pick rejected: {0}")]
    Advancement(#[from] AdvancementError),

    #[error("scripted actions ran out after {submitted} submissions")]
    ScriptExhausted { submitted: usize },

    #[error("roster names monster {0} but the catalog does not know it")]
    UnknownMonster(MonsterId),
}
