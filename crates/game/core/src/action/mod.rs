//! Action domain - the household actions a player can take.
//!
//! Each action is a small struct implementing [`ActionTransition`]:
//! - `pre_validate` checks preconditions against the untouched household
//! - `apply` mutates the household, including lifecycle side effects
//! - `post_validate` asserts invariants on the result
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`], the domain failure kinds
//! - `kinds`: one module per action (feed, sell, reproduce, sleep, rename)
//! - `types`: outcomes reported back to callers

pub mod error;
pub mod kinds;
pub mod types;

pub use error::ActionError;
pub use kinds::{FeedAction, RenameAction, ReproduceAction, SellAction, SleepAction};
pub use types::{ActionOutcome, SleepReport};

use crate::env::GameEnv;
use crate::state::{HamsterId, Household};

/// Defines how a concrete action mutates a household.
///
/// All hooks receive read-only access to rule configuration and randomness
/// via [`GameEnv`]; validation hooks must stay side-effect free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the household directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut Household, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum routed through the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Feed(FeedAction),
    Sell(SellAction),
    Reproduce(ReproduceAction),
    Sleep(SleepAction),
    Rename(RenameAction),
}

impl Action {
    /// Returns the snake_case name of the action, used in logs and events.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Feed(_) => "feed",
            Action::Sell(_) => "sell",
            Action::Reproduce(_) => "reproduce",
            Action::Sleep(_) => "sleep",
            Action::Rename(_) => "rename",
        }
    }

    /// Hamsters the action refers to, in argument order.
    pub fn targets(&self) -> Vec<HamsterId> {
        match self {
            Action::Feed(action) => vec![action.hamster],
            Action::Sell(action) => vec![action.hamster],
            Action::Reproduce(action) => vec![action.first, action.second],
            Action::Sleep(_) => Vec::new(),
            Action::Rename(action) => vec![action.hamster],
        }
    }
}

impl From<FeedAction> for Action {
    fn from(action: FeedAction) -> Self {
        Self::Feed(action)
    }
}

impl From<SellAction> for Action {
    fn from(action: SellAction) -> Self {
        Self::Sell(action)
    }
}

impl From<ReproduceAction> for Action {
    fn from(action: ReproduceAction) -> Self {
        Self::Reproduce(action)
    }
}

impl From<SleepAction> for Action {
    fn from(action: SleepAction) -> Self {
        Self::Sleep(action)
    }
}

impl From<RenameAction> for Action {
    fn from(action: RenameAction) -> Self {
        Self::Rename(action)
    }
}
