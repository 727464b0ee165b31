//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers one async method per
//! operation. Every method except [`register`](RuntimeHandle::register) and
//! [`authenticate`](RuntimeHandle::authenticate) takes the caller's
//! [`RequestContext`], which may be anonymous for [`seed`](RuntimeHandle::seed).
use tokio::sync::{broadcast, mpsc, oneshot};

use hamster_core::{
    AccountId, Action, FeedAction, HamsterId, RenameAction, ReproduceAction, SellAction,
    SleepAction,
};

use super::errors::{Result, RuntimeError};
use super::views::{AccountView, ActionReceipt, DeletionReceipt, HamsterView};
use crate::auth::{Identity, RequestContext};
use crate::events::{EventBus, GameEvent, Topic};
use crate::scenario::{Scenario, SeedReport};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T>>) -> Command,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Create an account with the starting balance. Never gold-gated.
    pub async fn register(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AccountView> {
        let (email, password) = (email.into(), password.into());
        self.request(|reply| Command::Register {
            email,
            password,
            reply,
        })
        .await
    }

    /// Resolve credentials to an identity.
    pub async fn authenticate(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Identity> {
        let (email, password) = (email.into(), password.into());
        self.request(|reply| Command::Authenticate {
            email,
            password,
            reply,
        })
        .await
    }

    /// Resolve credentials straight into a request context.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<RequestContext> {
        let identity = self.authenticate(email, password).await?;
        Ok(RequestContext::authenticated(identity))
    }

    pub async fn profile(&self, ctx: RequestContext) -> Result<AccountView> {
        self.request(|reply| Command::Profile { ctx, reply }).await
    }

    pub async fn hamsters(&self, ctx: RequestContext) -> Result<Vec<HamsterView>> {
        self.request(|reply| Command::Hamsters { ctx, reply }).await
    }

    pub async fn hamster(&self, ctx: RequestContext, hamster: HamsterId) -> Result<HamsterView> {
        self.request(|reply| Command::Hamster {
            ctx,
            hamster,
            reply,
        })
        .await
    }

    /// Execute any household action.
    pub async fn execute(&self, ctx: RequestContext, action: Action) -> Result<ActionReceipt> {
        self.request(|reply| Command::Execute { ctx, action, reply })
            .await
    }

    pub async fn feed(&self, ctx: RequestContext, hamster: HamsterId) -> Result<ActionReceipt> {
        self.execute(ctx, FeedAction::new(hamster).into()).await
    }

    pub async fn sell(&self, ctx: RequestContext, hamster: HamsterId) -> Result<ActionReceipt> {
        self.execute(ctx, SellAction::new(hamster).into()).await
    }

    pub async fn reproduce(
        &self,
        ctx: RequestContext,
        first: HamsterId,
        second: HamsterId,
    ) -> Result<ActionReceipt> {
        self.execute(ctx, ReproduceAction::new(first, second).into())
            .await
    }

    pub async fn sleep(&self, ctx: RequestContext, days: i64) -> Result<ActionReceipt> {
        self.execute(ctx, SleepAction::new(days).into()).await
    }

    pub async fn rename(
        &self,
        ctx: RequestContext,
        hamster: HamsterId,
        name: impl Into<String>,
    ) -> Result<ActionReceipt> {
        self.execute(ctx, RenameAction::new(hamster, name).into())
            .await
    }

    /// Admin only. Removes the account and every hamster it owns.
    pub async fn delete_account(
        &self,
        ctx: RequestContext,
        account: AccountId,
    ) -> Result<DeletionReceipt> {
        self.request(|reply| Command::DeleteAccount {
            ctx,
            account,
            reply,
        })
        .await
    }

    /// Create the scenario's accounts that do not exist yet.
    ///
    /// Anyone may seed player fixtures. A scenario holding admin fixtures
    /// needs an admin caller.
    pub async fn seed(&self, ctx: RequestContext, scenario: Scenario) -> Result<SeedReport> {
        self.request(|reply| Command::Seed {
            ctx,
            scenario,
            reply,
        })
        .await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Account` - Registrations and deletions
    /// - `Topic::Action` - Executed and rejected actions
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
