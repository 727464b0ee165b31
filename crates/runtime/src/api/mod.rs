//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration, workers, or infrastructure.

pub mod errors;
pub mod handle;
pub mod views;

pub use errors::{BLOCKED_MESSAGE, ErrorKind, RepositoryError, Result, RuntimeError};
pub use handle::RuntimeHandle;
pub use views::{AccountView, ActionReceipt, DeletionReceipt, HamsterView};
