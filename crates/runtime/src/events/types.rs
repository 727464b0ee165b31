//! Event payloads published by the game worker.

use hamster_core::{Action, AccountId, ActionOutcome, HouseholdDelta, TransitionPhase};
use serde::{Deserialize, Serialize};

use super::bus::Topic;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new account was created.
    AccountRegistered { account: AccountId, email: String },

    /// An admin removed an account and its hamsters.
    AccountDeleted {
        account: AccountId,
        by: AccountId,
        hamsters_removed: usize,
    },

    /// An action was committed.
    ActionExecuted {
        account: AccountId,
        action: Action,
        outcome: ActionOutcome,
        delta: Box<HouseholdDelta>,
    },

    /// An action was refused by the rules engine; nothing was written.
    ActionRejected {
        account: AccountId,
        action: Action,
        phase: TransitionPhase,
        error: String,
    },
}

impl GameEvent {
    pub fn topic(&self) -> Topic {
        match self {
            GameEvent::AccountRegistered { .. } | GameEvent::AccountDeleted { .. } => Topic::Account,
            GameEvent::ActionExecuted { .. } | GameEvent::ActionRejected { .. } => Topic::Action,
        }
    }

    pub fn account(&self) -> AccountId {
        match self {
            GameEvent::AccountRegistered { account, .. }
            | GameEvent::AccountDeleted { account, .. }
            | GameEvent::ActionExecuted { account, .. }
            | GameEvent::ActionRejected { account, .. } => *account,
        }
    }
}
