//! Access-control collaborator.
//!
//! The runtime never keeps a global "current user". Every request carries a
//! [`RequestContext`] resolved up front by [`authenticate`](crate::RuntimeHandle::authenticate);
//! actions only consult the identity it holds.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use hamster_core::{Account, AccountId, Roles};
use rand::RngCore;

use crate::api::{Result, RuntimeError};

const SALT_LEN: usize = 16;

/// Argon2id password hashing.
///
/// Hashes are stored as PHC strings (`$argon2id$v=19$...`), so the
/// parameters travel with each hash.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn hash(&self, password: &str) -> Result<String> {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let salt = SaltString::encode_b64(&salt).map_err(credential_error)?;

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(credential_error)?;
        Ok(hash.to_string())
    }

    /// Returns false for malformed hashes instead of failing.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        PasswordHash::new(stored).is_ok_and(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
    }
}

fn credential_error(error: argon2::password_hash::Error) -> RuntimeError {
    RuntimeError::Credentials(error.to_string())
}

/// Resolved caller of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub account: AccountId,
    pub roles: Roles,
}

impl Identity {
    pub fn new(account: AccountId, roles: Roles) -> Self {
        Self {
            account,
            roles: roles.normalized(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(Roles::ADMIN)
    }

    /// Owners always pass; admins pass when `admin_allowed` is set.
    pub fn may_access(&self, owner: AccountId, admin_allowed: bool) -> bool {
        self.account == owner || (admin_allowed && self.is_admin())
    }
}

impl From<&Account> for Identity {
    fn from(account: &Account) -> Self {
        Self::new(account.id, account.roles)
    }
}

/// Per-request access context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub identity: Option<Identity>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }
}
