//! Error types raised by repository implementations.

use hamster_core::{AccountId, HamsterId};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    #[error("hamster {0} not found")]
    HamsterNotFound(HamsterId),

    #[error("hamster {hamster} is owned by {owner}, not {expected}")]
    OwnerMismatch {
        hamster: HamsterId,
        owner: AccountId,
        expected: AccountId,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
