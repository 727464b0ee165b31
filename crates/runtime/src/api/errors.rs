//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from access checks, the rules engine, repositories and
//! worker coordination so clients can map them to a status in one place.
use std::fmt;

use hamster_core::{ActionError, ExecuteError, GameError};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Fixed message returned to accounts blocked by a negative balance.
pub const BLOCKED_MESSAGE: &str =
    "You have lost! Your gold balance is negative. You can no longer perform actions.";

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("{0} not found")]
    NotFound(String),

    #[error("access denied")]
    Forbidden,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("validation failed: {field}: {message}")]
    ValidationFailed {
        field: &'static str,
        message: String,
    },

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("{}", BLOCKED_MESSAGE)]
    Blocked,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("credential hashing failed: {0}")]
    Credentials(String),

    #[error(transparent)]
    Action(#[from] ExecuteError),

    #[error("game worker command channel closed")]
    CommandChannelClosed,

    #[error("game worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("game worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Error taxonomy shared with the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Unauthenticated,
    NotFound,
    Forbidden,
    InvalidArgument,
    AlreadySatiated,
    InsufficientFunds,
    SameGender,
    InactiveHamster,
    InvalidName,
    ValidationFailed,
    Blocked,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::AlreadySatiated => "AlreadySatiated",
            ErrorKind::InsufficientFunds => "InsufficientFunds",
            ErrorKind::SameGender => "SameGender",
            ErrorKind::InactiveHamster => "InactiveHamster",
            ErrorKind::InvalidName => "InvalidName",
            ErrorKind::ValidationFailed => "ValidationFailed",
            ErrorKind::Blocked => "Blocked",
            ErrorKind::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ActionError> for ErrorKind {
    fn from(error: &ActionError) -> Self {
        match error {
            ActionError::HamsterNotFound(_) => ErrorKind::NotFound,
            ActionError::AlreadySatiated(_) => ErrorKind::AlreadySatiated,
            ActionError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            ActionError::SameGender => ErrorKind::SameGender,
            ActionError::InactiveHamster(_) => ErrorKind::InactiveHamster,
            ActionError::InvalidName { .. } => ErrorKind::InvalidName,
            ActionError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::Unauthenticated => ErrorKind::Unauthenticated,
            RuntimeError::NotFound(_) => ErrorKind::NotFound,
            RuntimeError::Forbidden => ErrorKind::Forbidden,
            RuntimeError::InvalidArgument(_) | RuntimeError::InvalidConfig(_) => {
                ErrorKind::InvalidArgument
            }
            RuntimeError::ValidationFailed { .. } | RuntimeError::DuplicateEmail(_) => {
                ErrorKind::ValidationFailed
            }
            RuntimeError::Blocked => ErrorKind::Blocked,
            RuntimeError::Action(error) if error.severity().is_internal() => ErrorKind::Internal,
            RuntimeError::Action(error) => ErrorKind::from(error.action_error()),
            RuntimeError::CommandChannelClosed
            | RuntimeError::ReplyChannelClosed(_)
            | RuntimeError::WorkerJoin(_)
            | RuntimeError::Credentials(_)
            | RuntimeError::Repository(_) => ErrorKind::Internal,
        }
    }

    /// HTTP-style status for the presentation collaborator.
    pub fn status_code(&self) -> u16 {
        if matches!(self, RuntimeError::DuplicateEmail(_)) {
            return 409;
        }
        match self.kind() {
            ErrorKind::Unauthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
            ErrorKind::InvalidArgument
            | ErrorKind::AlreadySatiated
            | ErrorKind::InsufficientFunds
            | ErrorKind::SameGender
            | ErrorKind::InactiveHamster
            | ErrorKind::InvalidName
            | ErrorKind::ValidationFailed
            | ErrorKind::Blocked => 400,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }

    pub(crate) fn not_found(what: impl fmt::Display) -> Self {
        RuntimeError::NotFound(what.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamster_core::{HamsterId, TransitionPhase, TransitionPhaseError};

    fn rejected(error: ActionError) -> RuntimeError {
        RuntimeError::Action(ExecuteError::Feed(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            error,
        )))
    }

    #[test]
    fn action_errors_keep_their_kind() {
        let error = rejected(ActionError::AlreadySatiated(HamsterId(1)));
        assert_eq!(error.kind(), ErrorKind::AlreadySatiated);
        assert_eq!(error.status_code(), 400);

        let error = rejected(ActionError::HamsterNotFound(HamsterId(1)));
        assert_eq!(error.status_code(), 404);
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let error = RuntimeError::DuplicateEmail("a@b.io".into());
        assert_eq!(error.kind(), ErrorKind::ValidationFailed);
        assert_eq!(error.status_code(), 409);
    }

    #[test]
    fn blocked_uses_fixed_message() {
        assert_eq!(RuntimeError::Blocked.to_string(), BLOCKED_MESSAGE);
        assert_eq!(RuntimeError::Blocked.status_code(), 400);
    }

    #[test]
    fn repository_failures_are_internal() {
        let error = RuntimeError::from(RepositoryError::LockPoisoned);
        assert!(error.is_internal());
        assert_eq!(error.status_code(), 500);
    }
}
