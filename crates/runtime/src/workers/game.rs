//! Game worker that owns the repository.
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), resolves
//! access, executes actions via [`hamster_core::GameEngine`], commits the
//! resulting delta and publishes [`GameEvent`] notifications. Commands are
//! handled one at a time, so two actions on the same account never
//! interleave.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use hamster_core::{
    Account, AccountId, Action, GameConfig, GameEngine, GameEnv, GameError, Hamster, HamsterId,
    NewAccount, PcgRng, compute_seed,
};

use crate::api::{
    AccountView, ActionReceipt, DeletionReceipt, HamsterView, RepositoryError, Result,
    RuntimeError,
};
use crate::auth::{Identity, PasswordHasher, RequestContext};
use crate::events::{EventBus, GameEvent};
use crate::repository::{CommitReceipt, GameRepository};
use crate::scenario::{Scenario, SeedReport};

/// Commands that can be sent to the game worker
pub enum Command {
    Register {
        email: String,
        password: String,
        reply: oneshot::Sender<Result<AccountView>>,
    },
    Authenticate {
        email: String,
        password: String,
        reply: oneshot::Sender<Result<Identity>>,
    },
    Profile {
        ctx: RequestContext,
        reply: oneshot::Sender<Result<AccountView>>,
    },
    Hamsters {
        ctx: RequestContext,
        reply: oneshot::Sender<Result<Vec<HamsterView>>>,
    },
    Hamster {
        ctx: RequestContext,
        hamster: HamsterId,
        reply: oneshot::Sender<Result<HamsterView>>,
    },
    Execute {
        ctx: RequestContext,
        action: Action,
        reply: oneshot::Sender<Result<ActionReceipt>>,
    },
    DeleteAccount {
        ctx: RequestContext,
        account: AccountId,
        reply: oneshot::Sender<Result<DeletionReceipt>>,
    },
    Seed {
        ctx: RequestContext,
        scenario: Scenario,
        reply: oneshot::Sender<Result<SeedReport>>,
    },
}

/// Background task that processes account and household commands.
pub struct GameWorker {
    repo: Arc<dyn GameRepository>,
    config: GameConfig,
    game_seed: u64,
    nonce: u64,
    hasher: PasswordHasher,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl GameWorker {
    pub fn new(
        repo: Arc<dyn GameRepository>,
        config: GameConfig,
        game_seed: u64,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            repo,
            config,
            game_seed,
            nonce: 0,
            hasher: PasswordHasher,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "Command channel closed, game worker exiting");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Register {
                email,
                password,
                reply,
            } => {
                let _ = reply.send(self.register(&email, &password));
            }
            Command::Authenticate {
                email,
                password,
                reply,
            } => {
                let _ = reply.send(self.authenticate(&email, &password));
            }
            Command::Profile { ctx, reply } => {
                let _ = reply.send(self.profile(ctx));
            }
            Command::Hamsters { ctx, reply } => {
                let _ = reply.send(self.hamsters(ctx));
            }
            Command::Hamster {
                ctx,
                hamster,
                reply,
            } => {
                let _ = reply.send(self.hamster(ctx, hamster));
            }
            Command::Execute { ctx, action, reply } => {
                let _ = reply.send(self.execute(ctx, action));
            }
            Command::DeleteAccount {
                ctx,
                account,
                reply,
            } => {
                let _ = reply.send(self.delete_account(ctx, account));
            }
            Command::Seed {
                ctx,
                scenario,
                reply,
            } => {
                let _ = reply.send(self.seed(ctx, &scenario));
            }
        }
    }

    // ===== accounts =====

    fn register(&mut self, email: &str, password: &str) -> Result<AccountView> {
        let email = email.trim();
        validate_email(email)?;
        if password.chars().count() < GameConfig::MIN_PASSWORD_LEN {
            return Err(RuntimeError::ValidationFailed {
                field: "password",
                message: format!(
                    "must contain at least {} characters",
                    GameConfig::MIN_PASSWORD_LEN
                ),
            });
        }

        let password_hash = self.hasher.hash(password)?;
        let account = NewAccount::new(email, password_hash, self.config.starting_gold);
        let account = self.repo.insert_account(account).map_err(|e| match e {
            RepositoryError::DuplicateEmail(email) => RuntimeError::DuplicateEmail(email),
            other => RuntimeError::Repository(other),
        })?;

        info!(target: "runtime::worker", account = %account.id, "Account registered");
        self.event_bus.publish(GameEvent::AccountRegistered {
            account: account.id,
            email: account.email.clone(),
        });

        Ok(AccountView::new(&account, &[]))
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<Identity> {
        let account = self
            .repo
            .account_by_email(email.trim())?
            .filter(|account| self.hasher.verify(password, &account.password_hash))
            .ok_or(RuntimeError::Unauthenticated)?;
        Ok(Identity::from(&account))
    }

    fn delete_account(&mut self, ctx: RequestContext, target: AccountId) -> Result<DeletionReceipt> {
        let caller = self.caller(ctx)?;
        if !caller.is_admin() {
            return Err(RuntimeError::Forbidden);
        }

        let hamsters_removed = self.repo.hamsters_of(target)?.len();
        if !self.repo.delete_account(target)? {
            return Err(RuntimeError::not_found(format!("account {target}")));
        }

        info!(
            target: "runtime::worker",
            account = %target,
            by = %caller.id,
            hamsters_removed,
            "Account deleted"
        );
        self.event_bus.publish(GameEvent::AccountDeleted {
            account: target,
            by: caller.id,
            hamsters_removed,
        });

        Ok(DeletionReceipt {
            account: target,
            hamsters_removed,
        })
    }

    fn seed(&self, ctx: RequestContext, scenario: &Scenario) -> Result<SeedReport> {
        if scenario.has_admin() && !self.caller(ctx)?.is_admin() {
            return Err(RuntimeError::Forbidden);
        }
        scenario.apply(self.repo.as_ref(), &self.hasher)
    }

    // ===== reads =====

    fn profile(&self, ctx: RequestContext) -> Result<AccountView> {
        let caller = self.caller(ctx)?;
        let hamsters = self.repo.hamsters_of(caller.id)?;
        Ok(AccountView::new(&caller, &hamsters))
    }

    fn hamsters(&self, ctx: RequestContext) -> Result<Vec<HamsterView>> {
        let caller = self.caller(ctx)?;
        let hamsters = self.repo.hamsters_of(caller.id)?;
        Ok(hamsters.iter().map(HamsterView::from).collect())
    }

    fn hamster(&self, ctx: RequestContext, id: HamsterId) -> Result<HamsterView> {
        let caller = self.caller(ctx)?;
        let hamster = self.accessible_hamster(&caller, id, true)?;
        Ok(HamsterView::from(&hamster))
    }

    // ===== actions =====

    fn execute(&mut self, ctx: RequestContext, action: Action) -> Result<ActionReceipt> {
        let caller = self.caller(ctx)?;

        // Rename is the only action an admin may run on someone else's hamster.
        let admin_allowed = matches!(action, Action::Rename(_));
        let mut owner = caller.id;
        for id in action.targets() {
            owner = self.accessible_hamster(&caller, id, admin_allowed)?.owner;
        }

        let mut household = self.repo.household(owner)?;

        self.nonce += 1;
        let seed = compute_seed(self.game_seed, self.nonce, owner.0, 0);
        let rng = PcgRng;
        let env = GameEnv::from_parts(&self.config, &rng, seed);

        let execution = match GameEngine::new(&mut household).execute(env, &action) {
            Ok(execution) => execution,
            Err(error) => {
                warn!(
                    target: "runtime::worker",
                    account = %owner,
                    action = action.as_snake_case(),
                    phase = error.phase().as_str(),
                    code = error.error_code(),
                    error = %error.action_error(),
                    "Action rejected"
                );
                self.event_bus.publish(GameEvent::ActionRejected {
                    account: owner,
                    action: action.clone(),
                    phase: error.phase(),
                    error: error.action_error().to_string(),
                });
                return Err(RuntimeError::Action(error));
            }
        };

        let committed = if execution.delta.is_empty() {
            CommitReceipt::default()
        } else {
            self.repo.commit(owner, &execution.delta)?
        };

        info!(
            target: "runtime::worker",
            account = %owner,
            action = action.as_snake_case(),
            updated = execution.delta.updated.len(),
            removed = execution.delta.removed.len(),
            born = committed.born.len(),
            gold = household.account.gold,
            "Action committed"
        );

        let receipt = ActionReceipt {
            action: action.as_snake_case(),
            outcome: execution.outcome.clone(),
            gold: household.account.gold,
            hamsters: action
                .targets()
                .into_iter()
                .filter_map(|id| household.hamster(id))
                .map(HamsterView::from)
                .collect(),
            born: committed.born.iter().map(HamsterView::from).collect(),
        };

        self.event_bus.publish(GameEvent::ActionExecuted {
            account: owner,
            action,
            outcome: execution.outcome,
            delta: Box::new(execution.delta),
        });

        Ok(receipt)
    }

    // ===== access =====

    /// Resolve the caller and apply the negative-balance block.
    fn caller(&self, ctx: RequestContext) -> Result<Account> {
        let identity = ctx.identity.ok_or(RuntimeError::Unauthenticated)?;
        let account = self
            .repo
            .account(identity.account)?
            .ok_or(RuntimeError::Unauthenticated)?;

        if account.is_bankrupt() && !account.is_admin() {
            debug!(
                target: "runtime::worker",
                account = %account.id,
                gold = account.gold,
                "Blocked by negative balance"
            );
            return Err(RuntimeError::Blocked);
        }
        Ok(account)
    }

    fn accessible_hamster(
        &self,
        caller: &Account,
        id: HamsterId,
        admin_allowed: bool,
    ) -> Result<Hamster> {
        let hamster = self
            .repo
            .hamster(id)?
            .ok_or_else(|| RuntimeError::not_found(format!("hamster {id}")))?;

        if !Identity::from(caller).may_access(hamster.owner, admin_allowed) {
            return Err(RuntimeError::Forbidden);
        }
        Ok(hamster)
    }
}

fn validate_email(email: &str) -> Result<()> {
    let invalid = |message: &str| RuntimeError::ValidationFailed {
        field: "email",
        message: message.to_string(),
    };

    if email.chars().count() > GameConfig::MAX_EMAIL_LEN {
        return Err(invalid("is too long"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("invalid email format"));
    };
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());

    if well_formed {
        Ok(())
    } else {
        Err(invalid("invalid email format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format_rules() {
        assert!(validate_email("test@test.com").is_ok());
        assert!(validate_email("a.b@sub.domain.io").is_ok());

        for bad in ["", "plain", "@test.com", "a@b", "a@@b.com", "a@b..com", "a b@c.com"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }

        let long = format!("{}@test.com", "a".repeat(180));
        assert!(validate_email(&long).is_err());
    }
}
