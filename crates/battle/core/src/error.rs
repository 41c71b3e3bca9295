//! Common error infrastructure for battle-core.
//!
//! This module provides shared types and traits used across all error types in
//! battle-core. Domain-specific errors (e.g., `SkillError`, `TradeError`) are
//! defined in their respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action has its own error type with specific variants
//! - **Rich Context**: Errors carry combatant side and cycle for debugging
//! - **Severity Classification**: Errors are categorized for recovery strategies

use crate::state::Side;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed with another action
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted battle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - select a different action and retry.
    ///
    /// Examples: not enough mana, no potions left
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill slot, item not owned
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: engine re-entered mid-resolution
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - battle state corrupted, cannot continue.
    ///
    /// Examples: missing required oracle, resource outside its bounds
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for debugging and diagnostics.
///
/// Context is captured at the point of error creation and includes relevant
/// battle state information that helps diagnose the failure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Combatant involved in the error (if applicable).
    pub side: Option<Side>,

    /// Battle cycle at the time of error.
    ///
    /// The cycle uniquely identifies the point in the action sequence and is
    /// useful for correlating errors with specific battle states in logs.
    pub cycle: u64,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new error context for the given cycle.
    #[must_use]
    pub const fn new(cycle: u64) -> Self {
        Self {
            side: None,
            cycle,
            message: None,
        }
    }

    /// Attaches a combatant side to this context (builder pattern).
    #[must_use]
    pub const fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Attaches a static message to this context (builder pattern).
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Common trait for all battle-core errors.
///
/// This trait provides a uniform interface for error classification and context
/// retrieval across all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Include `ErrorContext` in variants that need debugging info
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    ///
    /// This is used for error handling strategies and logging priorities.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    ///
    /// Not all errors have context (e.g., errors delegated from other layers).
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        // Default: use the type name as error code
        core::any::type_name::<Self>()
    }
}
