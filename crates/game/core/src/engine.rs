//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for a [`Household`]. It
//! drives each action through its transition phases, rolls the household
//! back when any phase fails, and reports the resulting [`HouseholdDelta`]
//! for the persistence layer to commit.

use crate::action::{
    Action, ActionError, ActionOutcome, ActionTransition, FeedAction, RenameAction,
    ReproduceAction, SellAction, SleepAction,
};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Household, HouseholdDelta};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("feed action failed: {0}")]
    Feed(TransitionPhaseError<<FeedAction as ActionTransition>::Error>),

    #[error("sell action failed: {0}")]
    Sell(TransitionPhaseError<<SellAction as ActionTransition>::Error>),

    #[error("reproduce action failed: {0}")]
    Reproduce(TransitionPhaseError<<ReproduceAction as ActionTransition>::Error>),

    #[error("sleep action failed: {0}")]
    Sleep(TransitionPhaseError<<SleepAction as ActionTransition>::Error>),

    #[error("rename action failed: {0}")]
    Rename(TransitionPhaseError<<RenameAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// The domain error behind the failed phase.
    pub fn action_error(&self) -> &ActionError {
        match self {
            Self::Feed(e) | Self::Sell(e) | Self::Reproduce(e) | Self::Sleep(e) | Self::Rename(e) => {
                &e.error
            }
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Feed(e) | Self::Sell(e) | Self::Reproduce(e) | Self::Sleep(e) | Self::Rename(e) => {
                e.phase
            }
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self.phase() {
            TransitionPhase::PreValidate => self.action_error().severity(),
            TransitionPhase::Apply | TransitionPhase::PostValidate => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        self.action_error().error_code()
    }
}

/// Result of a successfully executed action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    pub outcome: ActionOutcome,
    pub delta: HouseholdDelta,
}

macro_rules! dispatch_transition {
    ($action:expr, $state:expr, $env:expr, { $($variant:ident),+ $(,)? }) => {{
        match $action {
            $(
                Action::$variant(transition) => {
                    drive_transition(transition, $state, $env).map_err(ExecuteError::$variant)
                }
            )+
        }
    }};
}

/// Game engine that executes actions against one household.
///
/// All mutations flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut Household,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given household.
    pub fn new(state: &'a mut Household) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through its transition pipeline.
    ///
    /// On error the household is restored to its state before the call, so
    /// a failed action never leaves partial mutations behind.
    pub fn execute(&mut self, env: GameEnv<'_>, action: &Action) -> Result<Execution, ExecuteError> {
        let before = self.state.clone();

        let result = dispatch_transition!(action, self.state, &env, {
            Feed,
            Sell,
            Reproduce,
            Sleep,
            Rename,
        });

        match result {
            Ok(outcome) => {
                let delta = HouseholdDelta::from_states(&before, self.state);
                Ok(Execution { outcome, delta })
            }
            Err(error) => {
                *self.state = before;
                Err(error)
            }
        }
    }
}

fn drive_transition<T>(
    transition: &T,
    state: &mut Household,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}
