//! Sell a hamster for a fixed payout.

use crate::action::{ActionError, ActionOutcome, ActionTransition};
use crate::env::GameEnv;
use crate::lifecycle::apply_transaction_effects;
use crate::state::{HamsterId, Household};

use super::require;

/// Sells a hamster: credits the payout, removes the hamster, then runs the
/// transaction tick over the remaining hamsters only.
///
/// Always allowed, whatever the hamster's state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellAction {
    pub hamster: HamsterId,
}

impl SellAction {
    pub fn new(hamster: HamsterId) -> Self {
        Self { hamster }
    }
}

impl ActionTransition for SellAction {
    type Error = ActionError;
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require(state, self.hamster)?;
        Ok(())
    }

    fn apply(&self, state: &mut Household, env: &GameEnv<'_>) -> Result<ActionOutcome, Self::Error> {
        let payout = env.config().sell_payout;

        state.account.gold = state.account.gold.saturating_add(payout);
        state
            .remove_hamster(self.hamster)
            .ok_or(ActionError::HamsterNotFound(self.hamster))?;

        apply_transaction_effects(&mut state.hamsters);

        Ok(ActionOutcome::Sold {
            hamster: self.hamster,
            payout,
        })
    }

    fn post_validate(&self, state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            !state.contains(self.hamster),
            "sold hamster must leave the household"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Gender;
    use crate::testing::{env, hamster, household};

    #[test]
    fn sell_pays_out_and_ages_the_rest() {
        let mut state = household(
            10,
            vec![
                hamster(1, Gender::Male, 100, 0),
                hamster(2, Gender::Female, 50, 40),
            ],
        );
        let action = SellAction::new(HamsterId(1));
        let env = env(0);

        action.pre_validate(&state, &env).unwrap();
        let outcome = action.apply(&mut state, &env).unwrap();
        action.post_validate(&state, &env).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Sold {
                hamster: HamsterId(1),
                payout: 300
            }
        );
        assert_eq!(state.account.gold, 310);
        assert!(!state.contains(HamsterId(1)));

        let rest = state.hamster(HamsterId(2)).unwrap();
        assert_eq!((rest.hunger, rest.age), (45, 45));
    }

    #[test]
    fn inactive_hamster_can_be_sold() {
        let mut old = hamster(1, Gender::Male, 100, 600);
        old.active = false;
        let mut state = household(0, vec![old]);

        SellAction::new(HamsterId(1))
            .apply(&mut state, &env(0))
            .unwrap();

        assert!(state.hamsters.is_empty());
        assert_eq!(state.account.gold, 300);
    }

    #[test]
    fn unknown_hamster_is_not_found() {
        let state = household(0, vec![]);

        let err = SellAction::new(HamsterId(3))
            .pre_validate(&state, &env(0))
            .unwrap_err();

        assert_eq!(err, ActionError::HamsterNotFound(HamsterId(3)));
    }
}
