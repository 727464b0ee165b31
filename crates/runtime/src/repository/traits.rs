//! Repository contracts for accounts and hamsters.

use hamster_core::{
    Account, AccountId, Hamster, HamsterId, Household, HouseholdDelta, NewAccount, NewHamster,
};

use super::error::{RepositoryError, Result};

// Re-export shared types
pub use super::types::CommitReceipt;

/// Repository for account and hamster persistence.
///
/// Ownership is stored once, on the hamster. "Hamsters of account X" is a
/// derived query ([`GameRepository::hamsters_of`]), never a stored list.
pub trait GameRepository: Send + Sync {
    /// Persist a new account and allocate its id.
    ///
    /// Fails with [`RepositoryError::DuplicateEmail`] if the email is taken.
    fn insert_account(&self, account: NewAccount) -> Result<Account>;

    /// Load an account by id.
    fn account(&self, id: AccountId) -> Result<Option<Account>>;

    /// Load an account by email (case-insensitive).
    fn account_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Delete an account and every hamster it owns.
    ///
    /// Returns false if no such account existed.
    fn delete_account(&self, id: AccountId) -> Result<bool>;

    /// Persist a new hamster for an existing account.
    fn insert_hamster(&self, hamster: NewHamster) -> Result<Hamster>;

    /// Load a hamster by id.
    fn hamster(&self, id: HamsterId) -> Result<Option<Hamster>>;

    /// All hamsters owned by `owner`, ordered by id.
    fn hamsters_of(&self, owner: AccountId) -> Result<Vec<Hamster>>;

    /// Durably apply all mutations of one action.
    ///
    /// Either every change in `delta` is applied or none is.
    fn commit(&self, owner: AccountId, delta: &HouseholdDelta) -> Result<CommitReceipt>;

    /// Number of registered accounts.
    fn account_count(&self) -> Result<usize>;

    /// Load an account together with the hamsters it owns.
    fn household(&self, owner: AccountId) -> Result<Household> {
        let account = self
            .account(owner)?
            .ok_or(RepositoryError::AccountNotFound(owner))?;
        let hamsters = self.hamsters_of(owner)?;
        Ok(Household::new(account, hamsters))
    }
}
