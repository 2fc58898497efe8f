//! Error infrastructure for skirmish-core.
//!
//! Every failure in the combat core is an expected gameplay outcome: it is
//! returned to the immediate caller as a [`CombatError`] and never leaves a
//! half-applied activation behind.
//!
//! # Design Principles
//!
//! - **Type Safety**: one error enum with a variant per gameplay outcome
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **Stable Codes**: every variant maps to a static code for logs and tests

use crate::state::CharacterId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed later (after regeneration,
///   a cooldown, a revive)
/// - **Validation**: the request itself is wrong and should be changed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retry later or pick another action.
    Recoverable,

    /// Invalid input, should not be retried unchanged.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for classifying errors.
///
/// Implemented by [`CombatError`]; front ends use it to pick log levels and to
/// report stable codes without matching on every variant.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Outcomes that stop an attack or ability activation.
///
/// Whenever one of these is returned, no health, resource, cooldown or
/// modifier value has been changed by the failed call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The caster knows no ability with this name.
    #[error("ability not found: {name}")]
    AbilityNotFound { name: String },

    /// The caster's resource pool cannot pay the ability cost.
    #[error("insufficient resource: requires {required}, has {available}")]
    InsufficientResource { required: u32, available: u32 },

    /// Target selection produced no eligible character.
    #[error("invalid target")]
    InvalidTarget,

    /// Caster or explicit target is not alive.
    #[error("actor is dead")]
    DeadActor,

    /// The ability was used too recently.
    #[error("ability on cooldown for {remaining} more turn(s)")]
    OnCooldown { remaining: u32 },

    /// No character occupies this id.
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),
}

impl CombatError {
    pub fn ability_not_found(name: impl Into<String>) -> Self {
        Self::AbilityNotFound { name: name.into() }
    }
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        use CombatError::*;
        match self {
            AbilityNotFound { .. } | InvalidTarget | CharacterNotFound(_) => {
                ErrorSeverity::Validation
            }
            InsufficientResource { .. } | DeadActor | OnCooldown { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use CombatError::*;
        match self {
            AbilityNotFound { .. } => "COMBAT_ABILITY_NOT_FOUND",
            InsufficientResource { .. } => "COMBAT_INSUFFICIENT_RESOURCE",
            InvalidTarget => "COMBAT_INVALID_TARGET",
            DeadActor => "COMBAT_DEAD_ACTOR",
            OnCooldown { .. } => "COMBAT_ON_COOLDOWN",
            CharacterNotFound(_) => "COMBAT_CHARACTER_NOT_FOUND",
        }
    }
}
