//! Read models returned to the presentation layer.

use hamster_core::{Account, AccountId, ActionOutcome, Gender, Gold, Hamster, HamsterId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HamsterView {
    pub id: HamsterId,
    pub owner: AccountId,
    pub name: String,
    pub age: i32,
    pub hunger: i32,
    pub gender: Gender,
    pub active: bool,
}

impl From<&Hamster> for HamsterView {
    fn from(hamster: &Hamster) -> Self {
        Self {
            id: hamster.id,
            owner: hamster.owner,
            name: hamster.name.clone(),
            age: hamster.age,
            hunger: hamster.hunger,
            gender: hamster.gender,
            active: hamster.active,
        }
    }
}

/// Account profile without the credential hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountView {
    pub id: AccountId,
    pub email: String,
    pub roles: Vec<&'static str>,
    pub gold: Gold,
    pub hamsters: Vec<HamsterView>,
}

impl AccountView {
    pub fn new(account: &Account, hamsters: &[Hamster]) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            roles: account.roles.names(),
            gold: account.gold,
            hamsters: hamsters.iter().map(HamsterView::from).collect(),
        }
    }
}

/// Result of a committed household action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionReceipt {
    pub action: &'static str,
    pub outcome: ActionOutcome,
    /// Balance after the action.
    pub gold: Gold,
    /// Hamsters the action targeted that still exist, after the action.
    pub hamsters: Vec<HamsterView>,
    /// Hamsters created by the action, with their stored ids.
    pub born: Vec<HamsterView>,
}

/// Result of an admin account deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeletionReceipt {
    pub account: AccountId,
    pub hamsters_removed: usize,
}
