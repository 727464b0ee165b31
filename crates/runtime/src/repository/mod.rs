//! Repository layer for account and hamster rows.
//!
//! Repositories own persistence only. Game rules live in `hamster-core` and
//! are applied to a loaded [`Household`](hamster_core::Household) before the
//! resulting delta is committed back.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileRepository;
pub use memory::InMemoryRepository;
pub use traits::{CommitReceipt, GameRepository};
pub use types::Tables;
