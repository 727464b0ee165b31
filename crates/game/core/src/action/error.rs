//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Gold, HamsterId};

/// Errors that can occur while validating or applying a household action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Referenced hamster is not part of the household.
    #[error("hamster {0} not found")]
    HamsterNotFound(HamsterId),

    /// Hunger already at the maximum; feeding would be wasted.
    #[error("hamster {0} is not hungry, it is already satiated")]
    AlreadySatiated(HamsterId),

    /// Balance does not cover the cost of the action.
    #[error("not enough gold: {required} required, {available} available")]
    InsufficientFunds { required: Gold, available: Gold },

    /// Breeding requires one male and one female.
    #[error("hamsters are not of opposite genders")]
    SameGender,

    /// Breeding requires both parents to be active.
    #[error("hamster {0} is inactive")]
    InactiveHamster(HamsterId),

    /// Trimmed name falls outside the allowed length.
    #[error("name must contain between {min} and {max} characters")]
    InvalidName { min: usize, max: usize },

    /// Malformed or out-of-range input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            HamsterNotFound(_) | InvalidName { .. } | InvalidArgument(_) => {
                ErrorSeverity::Validation
            }
            AlreadySatiated(_) | InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            SameGender | InactiveHamster(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            HamsterNotFound(_) => "ACTION_HAMSTER_NOT_FOUND",
            AlreadySatiated(_) => "ACTION_ALREADY_SATIATED",
            InsufficientFunds { .. } => "ACTION_INSUFFICIENT_FUNDS",
            SameGender => "ACTION_SAME_GENDER",
            InactiveHamster(_) => "ACTION_INACTIVE_HAMSTER",
            InvalidName { .. } => "ACTION_INVALID_NAME",
            InvalidArgument(_) => "ACTION_INVALID_ARGUMENT",
        }
    }
}
