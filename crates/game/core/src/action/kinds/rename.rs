//! Rename a hamster.

use crate::action::{ActionError, ActionOutcome, ActionTransition};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{HamsterId, Household};

use super::{require, require_mut};

/// Gives a hamster a new name. Surrounding whitespace is ignored.
///
/// Renaming to the current name succeeds without writing anything.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenameAction {
    pub hamster: HamsterId,
    pub name: String,
}

impl RenameAction {
    pub fn new(hamster: HamsterId, name: impl Into<String>) -> Self {
        Self {
            hamster,
            name: name.into(),
        }
    }

    fn trimmed(&self) -> &str {
        self.name.trim()
    }
}

impl ActionTransition for RenameAction {
    type Error = ActionError;
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &Household, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require(state, self.hamster)?;

        let len = self.trimmed().chars().count();
        if !(GameConfig::MIN_NAME_LEN..=GameConfig::MAX_NAME_LEN).contains(&len) {
            return Err(ActionError::InvalidName {
                min: GameConfig::MIN_NAME_LEN,
                max: GameConfig::MAX_NAME_LEN,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut Household, _env: &GameEnv<'_>) -> Result<ActionOutcome, Self::Error> {
        let name = self.trimmed();
        let hamster = require_mut(state, self.hamster)?;

        if hamster.name == name {
            return Ok(ActionOutcome::Unchanged {
                hamster: self.hamster,
            });
        }

        hamster.name = name.to_string();
        Ok(ActionOutcome::Renamed {
            hamster: self.hamster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Gender;
    use crate::testing::{env, hamster, household};

    #[test]
    fn rename_stores_trimmed_name() {
        let mut state = household(500, vec![hamster(1, Gender::Male, 100, 0)]);
        let action = RenameAction::new(HamsterId(1), "  Nibbles ");

        action.pre_validate(&state, &env(0)).unwrap();
        let outcome = action.apply(&mut state, &env(0)).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Renamed {
                hamster: HamsterId(1)
            }
        );
        assert_eq!(state.hamster(HamsterId(1)).unwrap().name, "Nibbles");
    }

    #[test]
    fn short_or_blank_names_are_invalid() {
        let state = household(500, vec![hamster(1, Gender::Male, 100, 0)]);

        for name in ["x", "   ", " y ", ""] {
            let err = RenameAction::new(HamsterId(1), name)
                .pre_validate(&state, &env(0))
                .unwrap_err();
            assert_eq!(
                err,
                ActionError::InvalidName { min: 2, max: 255 },
                "name {name:?}"
            );
        }
    }

    #[test]
    fn names_are_capped_at_column_width() {
        let state = household(500, vec![hamster(1, Gender::Male, 100, 0)]);

        let longest = "n".repeat(255);
        RenameAction::new(HamsterId(1), format!(" {longest} "))
            .pre_validate(&state, &env(0))
            .unwrap();

        let err = RenameAction::new(HamsterId(1), "n".repeat(256))
            .pre_validate(&state, &env(0))
            .unwrap_err();
        assert_eq!(err, ActionError::InvalidName { min: 2, max: 255 });
    }

    #[test]
    fn same_name_is_unchanged() {
        let mut state = household(500, vec![hamster(1, Gender::Male, 100, 0)]);
        let before = state.clone();

        let outcome = RenameAction::new(HamsterId(1), "Hamster1 ")
            .apply(&mut state, &env(0))
            .unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Unchanged {
                hamster: HamsterId(1)
            }
        );
        assert_eq!(state, before);
    }
}
