//! In-memory GameRepository implementation for tests and local runs.

use std::sync::RwLock;

use hamster_core::{
    Account, AccountId, Hamster, HamsterId, HouseholdDelta, NewAccount, NewHamster,
};

use crate::repository::types::{CommitReceipt, Tables};
use crate::repository::{GameRepository, RepositoryError, Result};

/// In-memory implementation of GameRepository.
///
/// Every write is applied to a single [`Tables`] under one lock, so a
/// commit is observed either fully or not at all.
pub struct InMemoryRepository {
    tables: RwLock<Tables>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_tables(Tables::new())
    }

    /// Create a repository over existing rows.
    pub fn with_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Copy of the current rows.
    pub fn snapshot(&self) -> Result<Tables> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.clone())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository for InMemoryRepository {
    fn insert_account(&self, account: NewAccount) -> Result<Account> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        tables.insert_account(account)
    }

    fn account(&self, id: AccountId) -> Result<Option<Account>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.account(id).cloned())
    }

    fn account_by_email(&self, email: &str) -> Result<Option<Account>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.account_by_email(email).cloned())
    }

    fn delete_account(&self, id: AccountId) -> Result<bool> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.delete_account(id))
    }

    fn insert_hamster(&self, hamster: NewHamster) -> Result<Hamster> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        tables.insert_hamster(hamster)
    }

    fn hamster(&self, id: HamsterId) -> Result<Option<Hamster>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.hamster(id).cloned())
    }

    fn hamsters_of(&self, owner: AccountId) -> Result<Vec<Hamster>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.hamsters_of(owner))
    }

    fn commit(&self, owner: AccountId, delta: &HouseholdDelta) -> Result<CommitReceipt> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        tables.commit(owner, delta)
    }

    fn account_count(&self) -> Result<usize> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.account_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamster_core::Gender;

    #[test]
    fn household_loads_owned_hamsters_only() {
        let repo = InMemoryRepository::new();
        let alice = repo
            .insert_account(NewAccount::new("alice@test.com", "hash", 500))
            .unwrap();
        let bob = repo
            .insert_account(NewAccount::new("bob@test.com", "hash", 500))
            .unwrap();
        repo.insert_hamster(NewHamster::newborn(alice.id, "Pip", Gender::Male))
            .unwrap();
        repo.insert_hamster(NewHamster::newborn(bob.id, "Dot", Gender::Female))
            .unwrap();

        let household = repo.household(alice.id).unwrap();
        assert_eq!(household.hamsters.len(), 1);
        assert_eq!(household.hamsters[0].name, "Pip");
    }

    #[test]
    fn household_of_missing_account_fails() {
        let repo = InMemoryRepository::new();
        let err = repo.household(AccountId(7)).unwrap_err();
        assert!(matches!(err, RepositoryError::AccountNotFound(AccountId(7))));
    }

    #[test]
    fn email_lookup_ignores_case() {
        let repo = InMemoryRepository::new();
        repo.insert_account(NewAccount::new("Test@Test.com", "hash", 500))
            .unwrap();
        assert!(repo.account_by_email("test@test.com").unwrap().is_some());
        assert_eq!(repo.account_count().unwrap(), 1);
    }
}
