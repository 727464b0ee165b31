//! Authoritative household state representation.
//!
//! A [`Household`] is the unit every action runs against: one account plus
//! the hamsters it owns. It is assembled by the persistence layer, mutated
//! exclusively through the engine, and the resulting [`HouseholdDelta`] is
//! handed back for commit.
pub mod delta;
pub mod types;

pub use delta::HouseholdDelta;
pub use types::{
    Account, AccountId, Gender, Gold, Hamster, HamsterId, NewAccount, NewHamster, Roles,
};

/// One account and the hamsters whose owner is that account.
///
/// This is a derived view: ownership is stored on each hamster, and the
/// collection is rebuilt from that foreign key whenever it is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Household {
    pub account: Account,
    /// Persisted hamsters, ordered by id.
    pub hamsters: Vec<Hamster>,
    /// Hamsters born during the current action, not yet persisted.
    ///
    /// Kept apart from `hamsters` so lifecycle passes never touch them.
    pub newborns: Vec<NewHamster>,
}

impl Household {
    /// Builds a household, dropping any hamster that belongs to someone else.
    pub fn new(account: Account, hamsters: impl IntoIterator<Item = Hamster>) -> Self {
        let owner = account.id;
        let mut hamsters: Vec<Hamster> = hamsters
            .into_iter()
            .filter(|hamster| hamster.owner == owner)
            .collect();
        hamsters.sort_by_key(|hamster| hamster.id);

        Self {
            account,
            hamsters,
            newborns: Vec::new(),
        }
    }

    pub fn owner(&self) -> AccountId {
        self.account.id
    }

    pub fn hamster(&self, id: HamsterId) -> Option<&Hamster> {
        self.hamsters.iter().find(|hamster| hamster.id == id)
    }

    pub fn hamster_mut(&mut self, id: HamsterId) -> Option<&mut Hamster> {
        self.hamsters.iter_mut().find(|hamster| hamster.id == id)
    }

    pub fn contains(&self, id: HamsterId) -> bool {
        self.hamster(id).is_some()
    }

    /// Removes a hamster from the household, returning it if present.
    pub fn remove_hamster(&mut self, id: HamsterId) -> Option<Hamster> {
        let index = self.hamsters.iter().position(|hamster| hamster.id == id)?;
        Some(self.hamsters.remove(index))
    }
}
