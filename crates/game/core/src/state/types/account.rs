use bitflags::bitflags;

use super::common::{AccountId, Gold};

bitflags! {
    /// Role set granted to an account.
    ///
    /// `USER` is always present; `ADMIN` unlocks account deletion, acting on
    /// foreign hamsters where allowed, and exemption from the gold block.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Roles: u8 {
        const USER = 0b0000_0001;
        const ADMIN = 0b0000_0010;
    }
}

impl Roles {
    /// Normalizes a role set so the base `USER` role is always granted.
    pub fn normalized(self) -> Self {
        self | Self::USER
    }

    /// Role names in the conventional `ROLE_*` spelling.
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2);
        if self.contains(Self::USER) {
            names.push("ROLE_USER");
        }
        if self.contains(Self::ADMIN) {
            names.push("ROLE_ADMIN");
        }
        names
    }
}

impl Default for Roles {
    fn default() -> Self {
        Self::USER
    }
}

/// A registered player identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    pub id: AccountId,
    /// Unique, stored trimmed.
    pub email: String,
    pub password_hash: String,
    pub roles: Roles,
    pub gold: Gold,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.roles.contains(Roles::ADMIN)
    }

    /// True once the balance dropped below zero.
    pub fn is_bankrupt(&self) -> bool {
        self.gold < 0
    }

    pub fn can_afford(&self, cost: Gold) -> bool {
        self.gold >= cost
    }
}

/// Account row that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub roles: Roles,
    pub gold: Gold,
}

impl NewAccount {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, gold: Gold) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            roles: Roles::USER,
            gold,
        }
    }

    pub fn with_roles(mut self, roles: Roles) -> Self {
        self.roles = roles.normalized();
        self
    }

    /// Attaches the identifier allocated by the store.
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            email: self.email,
            password_hash: self.password_hash,
            roles: self.roles.normalized(),
            gold: self.gold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_is_always_granted() {
        let account = NewAccount::new("a@b.io", "hash", 500)
            .with_roles(Roles::ADMIN)
            .into_account(AccountId(1));

        assert!(account.roles.contains(Roles::USER));
        assert!(account.is_admin());
        assert_eq!(account.roles.names(), vec!["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[test]
    fn negative_gold_is_bankrupt() {
        let mut account = NewAccount::new("a@b.io", "hash", 0).into_account(AccountId(1));
        assert!(!account.is_bankrupt());

        account.gold = -1;
        assert!(account.is_bankrupt());
        assert!(!account.can_afford(0));
    }
}
