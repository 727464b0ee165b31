//! Fixture accounts and hamsters for local play and tests.
//!
//! A scenario lists accounts to create, each with its starting hamsters.
//! Seeding is idempotent per email: accounts that already exist are left
//! untouched, so a scenario can be applied on every start.

use std::path::Path;

use hamster_core::{Gender, Gold, NewAccount, NewHamster, Roles};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};
use crate::auth::PasswordHasher;
use crate::repository::GameRepository;

/// Starting state of one fixture hamster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HamsterFixture {
    pub name: String,
    pub gender: Gender,
    #[serde(default = "full_hunger")]
    pub hunger: i32,
    #[serde(default)]
    pub age: i32,
    #[serde(default = "active")]
    pub active: bool,
}

fn full_hunger() -> i32 {
    hamster_core::GameConfig::MAX_HUNGER
}

fn active() -> bool {
    true
}

impl HamsterFixture {
    pub fn newborn(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            hunger: full_hunger(),
            age: 0,
            active: true,
        }
    }
}

/// One fixture account. The password is stored in clear and hashed on seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFixture {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub admin: bool,
    pub gold: Gold,
    #[serde(default)]
    pub hamsters: Vec<HamsterFixture>,
}

/// Scenario configuration for repository seeding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub accounts: Vec<AccountFixture>,
}

/// What a seed run created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub accounts_created: usize,
    pub accounts_skipped: usize,
    pub hamsters_created: usize,
}

impl Scenario {
    pub const PLAYER_EMAIL: &'static str = "test@test.com";
    pub const PLAYER_PASSWORD: &'static str = "password";

    /// The default player: 500 gold and four hamsters (m, m, f, f).
    pub fn player() -> Self {
        let genders = [Gender::Male, Gender::Male, Gender::Female, Gender::Female];
        let hamsters = genders
            .into_iter()
            .enumerate()
            .map(|(i, gender)| HamsterFixture::newborn(format!("Hamster{i}"), gender))
            .collect();

        Self {
            accounts: vec![AccountFixture {
                email: Self::PLAYER_EMAIL.to_string(),
                password: Self::PLAYER_PASSWORD.to_string(),
                admin: false,
                gold: hamster_core::GameConfig::DEFAULT_STARTING_GOLD,
                hamsters,
            }],
        }
    }

    /// Adds an admin account without hamsters.
    pub fn with_admin(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts.push(AccountFixture {
            email: email.into(),
            password: password.into(),
            admin: true,
            gold: hamster_core::GameConfig::DEFAULT_STARTING_GOLD,
            hamsters: Vec::new(),
        });
        self
    }

    pub fn has_admin(&self) -> bool {
        self.accounts.iter().any(|account| account.admin)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            RuntimeError::InvalidConfig(format!("Failed to parse scenario JSON: {}", e))
        })
    }

    /// Load scenario from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::InvalidConfig(format!("Failed to read scenario file: {}", e))
        })?;
        Self::from_json_str(&content)
    }

    /// Create every fixture account that does not exist yet.
    pub fn apply(
        &self,
        repo: &dyn GameRepository,
        hasher: &PasswordHasher,
    ) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        for fixture in &self.accounts {
            if repo.account_by_email(&fixture.email)?.is_some() {
                report.accounts_skipped += 1;
                continue;
            }

            let roles = if fixture.admin {
                Roles::ADMIN
            } else {
                Roles::USER
            };
            let account = repo.insert_account(
                NewAccount::new(
                    fixture.email.as_str(),
                    hasher.hash(&fixture.password)?,
                    fixture.gold,
                )
                .with_roles(roles),
            )?;
            report.accounts_created += 1;

            for hamster in &fixture.hamsters {
                repo.insert_hamster(NewHamster {
                    hunger: hamster.hunger,
                    age: hamster.age,
                    active: hamster.active,
                    ..NewHamster::newborn(account.id, hamster.name.as_str(), hamster.gender)
                })?;
                report.hamsters_created += 1;
            }

            tracing::info!(
                "Seeded account {} with {} hamsters",
                account.email,
                fixture.hamsters.len()
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;

    #[test]
    fn player_fixture_matches_defaults() {
        let scenario = Scenario::player();
        let player = &scenario.accounts[0];

        assert_eq!(player.email, "test@test.com");
        assert_eq!(player.gold, 500);
        let genders: Vec<_> = player.hamsters.iter().map(|h| h.gender).collect();
        assert_eq!(
            genders,
            vec![Gender::Male, Gender::Male, Gender::Female, Gender::Female]
        );
        assert!(player.hamsters.iter().all(|h| h.hunger == 100 && h.age == 0 && h.active));
    }

    #[test]
    fn seeding_twice_creates_nothing_new() {
        let repo = InMemoryRepository::new();
        let hasher = PasswordHasher;
        let scenario = Scenario::player().with_admin("admin@test.com", "adminpass");

        let first = scenario.apply(&repo, &hasher).unwrap();
        assert_eq!(first.accounts_created, 2);
        assert_eq!(first.hamsters_created, 4);

        let second = scenario.apply(&repo, &hasher).unwrap();
        assert_eq!(second.accounts_created, 0);
        assert_eq!(second.accounts_skipped, 2);

        let admin = repo.account_by_email("admin@test.com").unwrap().unwrap();
        assert!(admin.is_admin());
    }

    #[test]
    fn parses_json_with_defaults() {
        let scenario = Scenario::from_json_str(
            r#"{"accounts":[{"email":"a@b.io","password":"secret123","gold":10,
                "hamsters":[{"name":"Old","gender":"f","age":499}]}]}"#,
        )
        .unwrap();

        let hamster = &scenario.accounts[0].hamsters[0];
        assert_eq!(hamster.gender, Gender::Female);
        assert_eq!(hamster.age, 499);
        assert_eq!(hamster.hunger, 100);
        assert!(hamster.active);
        assert!(!scenario.accounts[0].admin);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Scenario::from_json_str("{").unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidConfig(_)));
    }
}
