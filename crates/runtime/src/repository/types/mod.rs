//! Shared types for repository layer.

mod tables;

pub use tables::Tables;

use hamster_core::Hamster;

/// Rows written by a successful [`commit`](super::GameRepository::commit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Newborn hamsters with their allocated ids, in delta order.
    pub born: Vec<Hamster>,
}
