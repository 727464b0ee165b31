//! Common error infrastructure for hamster-core.
//!
//! Domain-specific errors (e.g. [`ActionError`](crate::action::ActionError))
//! live next to the code that raises them; this module only provides the
//! classification shared by all of them.

/// Severity level of an error, used for categorization and logging priority.
///
/// - **Recoverable**: the player can fix the situation (earn gold, pick other hamsters)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with an alternative action.
    ///
    /// Examples: not enough gold, hamster already satiated
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: hamster not found, name too short
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all hamster-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity based on recoverability, not impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; clients may match on it.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
