//! Worker tasks that back the runtime orchestration.
//!
//! A single game worker owns the repository and executes every command in
//! arrival order.

mod game;

pub use game::{Command, GameWorker};
