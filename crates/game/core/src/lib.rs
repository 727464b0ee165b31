//! Deterministic hamster rules and data types.
//!
//! `hamster-core` defines the canonical rules (lifecycle, actions, engine,
//! household state) and exposes pure APIs reused by the runtime and tests.
//! It performs no I/O: households are loaded and committed by the caller,
//! and all state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod lifecycle;
pub mod state;

#[cfg(test)]
mod testing;

pub use action::{
    Action, ActionError, ActionOutcome, ActionTransition, FeedAction, RenameAction,
    ReproduceAction, SellAction, SleepAction, SleepReport,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, Execution, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{Env, GameEnv, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use lifecycle::{AgingReport, advance, apply_transaction_effects};
pub use state::{
    Account, AccountId, Gender, Gold, Hamster, HamsterId, Household, HouseholdDelta, NewAccount,
    NewHamster, Roles,
};
