//! Skip time for the whole household.

use crate::action::{ActionError, ActionOutcome, ActionTransition, SleepReport};
use crate::env::GameEnv;
use crate::lifecycle::advance;
use crate::state::Household;

/// Ages every hamster by `days` and drains the same amount of hunger.
///
/// This is a caller-controlled multiplier on the lifecycle rule and does
/// not run the fixed transaction tick on top.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepAction {
    pub days: i64,
}

impl SleepAction {
    pub fn new(days: i64) -> Self {
        Self { days }
    }

    fn steps(&self) -> Result<i32, ActionError> {
        if self.days < 0 {
            return Err(ActionError::InvalidArgument(
                "days must be zero or positive".to_string(),
            ));
        }
        i32::try_from(self.days)
            .map_err(|_| ActionError::InvalidArgument("days is too large".to_string()))
    }
}

impl ActionTransition for SleepAction {
    type Error = ActionError;
    type Result = ActionOutcome;

    fn pre_validate(&self, _state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.steps().map(|_| ())
    }

    fn apply(&self, state: &mut Household, _env: &GameEnv<'_>) -> Result<ActionOutcome, Self::Error> {
        let aging = advance(state.hamsters.iter_mut(), self.steps()?);
        Ok(ActionOutcome::Slept(SleepReport::new(self.days, aging)))
    }
}
