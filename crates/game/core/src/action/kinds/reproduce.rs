//! Breed two hamsters of opposite genders.

use crate::action::{ActionError, ActionOutcome, ActionTransition};
use crate::config::GameConfig;
use crate::env::{GameEnv, RngOracle};
use crate::lifecycle::apply_transaction_effects;
use crate::state::{Gender, HamsterId, Household, NewHamster};

use super::require;

/// Roll contexts for the independent random draws of one breeding.
const NAME_ROLL: u32 = 0;
const GENDER_ROLL: u32 = 1;

/// Breeds two hamsters of the household into a newborn.
///
/// The newborn belongs to the acting household. It is full, aged zero,
/// active, and named `Baby<nnn>` with a suffix in
/// [`GameConfig::BABY_SUFFIX_MIN`]..=[`GameConfig::BABY_SUFFIX_MAX`]. The
/// transaction tick runs over the existing hamsters before the newborn
/// joins them, so the newborn is not aged by its own birth.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReproduceAction {
    pub first: HamsterId,
    pub second: HamsterId,
}

impl ReproduceAction {
    pub fn new(first: HamsterId, second: HamsterId) -> Self {
        Self { first, second }
    }

    fn newborn(state: &Household, env: &GameEnv<'_>) -> NewHamster {
        let rng = env.rng();
        let suffix = rng.range(
            env.roll_seed(NAME_ROLL),
            GameConfig::BABY_SUFFIX_MIN,
            GameConfig::BABY_SUFFIX_MAX,
        );
        let gender = if rng.coin(env.roll_seed(GENDER_ROLL)) {
            Gender::Male
        } else {
            Gender::Female
        };

        NewHamster::newborn(
            state.owner(),
            format!("{}{}", GameConfig::BABY_NAME_PREFIX, suffix),
            gender,
        )
    }
}

impl ActionTransition for ReproduceAction {
    type Error = ActionError;
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let first = require(state, self.first)?;
        let second = require(state, self.second)?;

        if first.gender == second.gender {
            return Err(ActionError::SameGender);
        }

        for parent in [first, second] {
            if !parent.active {
                return Err(ActionError::InactiveHamster(parent.id));
            }
        }

        Ok(())
    }

    fn apply(&self, state: &mut Household, env: &GameEnv<'_>) -> Result<ActionOutcome, Self::Error> {
        let baby = Self::newborn(state, env);

        apply_transaction_effects(&mut state.hamsters);
        state.newborns.push(baby.clone());

        Ok(ActionOutcome::Bred { baby })
    }

    fn post_validate(&self, state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            state
                .newborns
                .iter()
                .all(|baby| baby.owner == state.owner() && baby.age == 0),
            "newborns belong to the household and are not aged at birth"
        );
        Ok(())
    }
}
