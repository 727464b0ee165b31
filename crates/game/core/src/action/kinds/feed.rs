//! Feed a hamster back to full hunger.

use crate::action::{ActionError, ActionOutcome, ActionTransition};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::lifecycle::apply_transaction_effects;
use crate::state::{HamsterId, Household};

use super::{require, require_mut};

/// Feeds one hamster, paying one gold per missing hunger point.
///
/// The cost is computed from the hunger **before** the transaction tick.
/// The tick then runs over the whole household (target included) and only
/// afterwards is the target reset to full hunger, so it always ends at
/// [`GameConfig::MAX_HUNGER`].
///
/// Inactive hamsters can still be fed; feeding does not reactivate them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedAction {
    pub hamster: HamsterId,
}

impl FeedAction {
    pub fn new(hamster: HamsterId) -> Self {
        Self { hamster }
    }
}

impl ActionTransition for FeedAction {
    type Error = ActionError;
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let hamster = require(state, self.hamster)?;

        if hamster.is_satiated() {
            return Err(ActionError::AlreadySatiated(self.hamster));
        }

        let cost = hamster.feeding_cost();
        if !state.account.can_afford(cost) {
            return Err(ActionError::InsufficientFunds {
                required: cost,
                available: state.account.gold,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut Household, _env: &GameEnv<'_>) -> Result<ActionOutcome, Self::Error> {
        let cost = require(state, self.hamster)?.feeding_cost();

        apply_transaction_effects(&mut state.hamsters);

        require_mut(state, self.hamster)?.hunger = GameConfig::MAX_HUNGER;
        state.account.gold -= cost;

        Ok(ActionOutcome::Fed {
            hamster: self.hamster,
            cost,
        })
    }

    fn post_validate(&self, state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            state
                .hamster(self.hamster)
                .is_some_and(|hamster| hamster.hunger == GameConfig::MAX_HUNGER),
            "fed hamster must end at full hunger"
        );
        debug_assert!(state.account.gold >= 0, "feeding never overdraws");

        Ok(())
    }
}
