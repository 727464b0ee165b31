//! File-backed GameRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use hamster_core::{
    Account, AccountId, Hamster, HamsterId, HouseholdDelta, NewAccount, NewHamster,
};

use crate::repository::types::{CommitReceipt, Tables};
use crate::repository::{GameRepository, RepositoryError, Result};

const SNAPSHOT_FILE: &str = "hamsters.bin";

/// File-based implementation of GameRepository.
///
/// All rows live in memory and are written to a single bincode snapshot
/// after every successful mutation.
///
/// # File Format
///
/// The snapshot is `hamsters.bin`, a bincode-encoded [`Tables`]. Writes go
/// to `hamsters.bin.tmp` first and are renamed over the snapshot, so a
/// crash mid-write leaves the previous snapshot intact.
pub struct FileRepository {
    path: PathBuf,
    tables: RwLock<Tables>,
}

impl FileRepository {
    /// Open the repository in `base_dir`, loading an existing snapshot if any.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;

        let path = base_dir.join(SNAPSHOT_FILE);
        let tables = if path.exists() {
            let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
            let tables: Tables = bincode::deserialize(&bytes)
                .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;
            tracing::debug!("Loaded {} accounts from {}", tables.account_count(), path.display());
            tables
        } else {
            Tables::new()
        };

        Ok(Self {
            path,
            tables: RwLock::new(tables),
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, tables: &Tables) -> Result<()> {
        let temp_path = self.path.with_extension("bin.tmp");

        let bytes = bincode::serialize(tables)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    /// Run `op` on a copy of the rows, persist it, then publish it.
    fn write<T>(&self, op: impl FnOnce(&mut Tables) -> Result<T>) -> Result<T> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut next = tables.clone();
        let value = op(&mut next)?;
        self.persist(&next)?;
        *tables = next;

        Ok(value)
    }

    fn read<T>(&self, op: impl FnOnce(&Tables) -> T) -> Result<T> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(op(&tables))
    }
}

impl GameRepository for FileRepository {
    fn insert_account(&self, account: NewAccount) -> Result<Account> {
        self.write(|tables| tables.insert_account(account))
    }

    fn account(&self, id: AccountId) -> Result<Option<Account>> {
        self.read(|tables| tables.account(id).cloned())
    }

    fn account_by_email(&self, email: &str) -> Result<Option<Account>> {
        self.read(|tables| tables.account_by_email(email).cloned())
    }

    fn delete_account(&self, id: AccountId) -> Result<bool> {
        if self.account(id)?.is_none() {
            return Ok(false);
        }
        self.write(|tables| Ok(tables.delete_account(id)))
    }

    fn insert_hamster(&self, hamster: NewHamster) -> Result<Hamster> {
        self.write(|tables| tables.insert_hamster(hamster))
    }

    fn hamster(&self, id: HamsterId) -> Result<Option<Hamster>> {
        self.read(|tables| tables.hamster(id).cloned())
    }

    fn hamsters_of(&self, owner: AccountId) -> Result<Vec<Hamster>> {
        self.read(|tables| tables.hamsters_of(owner))
    }

    fn commit(&self, owner: AccountId, delta: &HouseholdDelta) -> Result<CommitReceipt> {
        self.write(|tables| tables.commit(owner, delta))
    }

    fn account_count(&self) -> Result<usize> {
        self.read(Tables::account_count)
    }
}
