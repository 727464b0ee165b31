//! Row storage shared by the in-memory and file repositories.

use std::collections::BTreeMap;

use hamster_core::{
    Account, AccountId, Hamster, HamsterId, HouseholdDelta, NewAccount, NewHamster,
};
use serde::{Deserialize, Serialize};

use super::CommitReceipt;
use crate::repository::{RepositoryError, Result};

/// Account and hamster rows plus id sequences.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    next_account_id: u64,
    next_hamster_id: u64,
    accounts: BTreeMap<AccountId, Account>,
    hamsters: BTreeMap<HamsterId, Hamster>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            next_account_id: 1,
            next_hamster_id: 1,
            accounts: BTreeMap::new(),
            hamsters: BTreeMap::new(),
        }
    }
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn account_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.email.eq_ignore_ascii_case(email))
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn hamster(&self, id: HamsterId) -> Option<&Hamster> {
        self.hamsters.get(&id)
    }

    pub fn hamsters_of(&self, owner: AccountId) -> Vec<Hamster> {
        self.hamsters
            .values()
            .filter(|hamster| hamster.owner == owner)
            .cloned()
            .collect()
    }

    pub fn insert_account(&mut self, account: NewAccount) -> Result<Account> {
        if self.account_by_email(&account.email).is_some() {
            return Err(RepositoryError::DuplicateEmail(account.email));
        }

        let id = AccountId(self.next_account_id);
        self.next_account_id += 1;

        let account = account.into_account(id);
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    pub fn insert_hamster(&mut self, hamster: NewHamster) -> Result<Hamster> {
        if !self.accounts.contains_key(&hamster.owner) {
            return Err(RepositoryError::AccountNotFound(hamster.owner));
        }

        let id = HamsterId(self.next_hamster_id);
        self.next_hamster_id += 1;

        let hamster = hamster.into_hamster(id);
        self.hamsters.insert(id, hamster.clone());
        Ok(hamster)
    }

    /// Remove an account and cascade to the hamsters it owns.
    pub fn delete_account(&mut self, id: AccountId) -> bool {
        if self.accounts.remove(&id).is_none() {
            return false;
        }
        self.hamsters.retain(|_, hamster| hamster.owner != id);
        true
    }

    /// Apply one action's delta. On error `self` is left untouched.
    pub fn commit(&mut self, owner: AccountId, delta: &HouseholdDelta) -> Result<CommitReceipt> {
        let mut next = self.clone();
        let receipt = next.apply(owner, delta)?;
        *self = next;
        Ok(receipt)
    }

    fn apply(&mut self, owner: AccountId, delta: &HouseholdDelta) -> Result<CommitReceipt> {
        if !self.accounts.contains_key(&owner) {
            return Err(RepositoryError::AccountNotFound(owner));
        }

        if let Some(account) = &delta.account {
            if account.id != owner {
                return Err(RepositoryError::AccountNotFound(account.id));
            }
            self.accounts.insert(owner, account.clone());
        }

        for hamster in &delta.updated {
            self.ensure_owned(hamster.id, owner)?;
            self.hamsters.insert(hamster.id, hamster.clone());
        }

        for id in &delta.removed {
            self.ensure_owned(*id, owner)?;
            self.hamsters.remove(id);
        }

        let mut born = Vec::with_capacity(delta.born.len());
        for newborn in &delta.born {
            born.push(self.insert_hamster(newborn.clone())?);
        }

        Ok(CommitReceipt { born })
    }

    fn ensure_owned(&self, id: HamsterId, expected: AccountId) -> Result<()> {
        let hamster = self
            .hamsters
            .get(&id)
            .ok_or(RepositoryError::HamsterNotFound(id))?;
        if hamster.owner != expected {
            return Err(RepositoryError::OwnerMismatch {
                hamster: id,
                owner: hamster.owner,
                expected,
            });
        }
        Ok(())
    }
}
