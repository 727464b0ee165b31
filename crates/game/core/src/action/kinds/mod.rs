pub mod feed;
pub mod rename;
pub mod reproduce;
pub mod sell;
pub mod sleep;

pub use feed::FeedAction;
pub use rename::RenameAction;
pub use reproduce::ReproduceAction;
pub use sell::SellAction;
pub use sleep::SleepAction;

use crate::action::ActionError;
use crate::state::{Hamster, HamsterId, Household};

/// Looks up a hamster the action depends on.
fn require(state: &Household, id: HamsterId) -> Result<&Hamster, ActionError> {
    state.hamster(id).ok_or(ActionError::HamsterNotFound(id))
}

fn require_mut(state: &mut Household, id: HamsterId) -> Result<&mut Hamster, ActionError> {
    state
        .hamster_mut(id)
        .ok_or(ActionError::HamsterNotFound(id))
}
