//! Command-line client for the hamster runtime.
//!
//! Each invocation opens the runtime over the configured data directory,
//! runs one command and prints its JSON result.

pub mod cli;
pub mod config;

use hamster_core::{AccountId, HamsterId};
use runtime::{
    AccountView, ActionReceipt, DeletionReceipt, ErrorKind, HamsterView, RequestContext,
    RuntimeError, RuntimeHandle, Scenario, SeedReport,
};
use serde::Serialize;

pub use cli::{Cli, Command};
pub use config::ClientConfig;

/// Successful command payload.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Account(AccountView),
    Hamsters(Vec<HamsterView>),
    Hamster(HamsterView),
    Action(ActionReceipt),
    Deleted(DeletionReceipt),
    Seeded(SeedReport),
}

/// Failure payload printed instead of a [`Response`].
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorKind,
    pub message: String,
    pub status: u16,
}

impl From<&RuntimeError> for ErrorBody {
    fn from(error: &RuntimeError) -> Self {
        Self {
            error: error.kind(),
            message: error.to_string(),
            status: error.status_code(),
        }
    }
}

/// Run one command against the runtime.
pub async fn execute(cli: &Cli, handle: &RuntimeHandle) -> Result<Response, RuntimeError> {
    let response = match &cli.command {
        Command::Register => {
            let (email, password) = credentials(cli).ok_or_else(|| {
                RuntimeError::InvalidArgument("--email and --password are required".to_string())
            })?;
            Response::Account(handle.register(email, password).await?)
        }
        Command::Seed {
            file,
            admin_email,
            admin_password,
        } => {
            let mut scenario = match file {
                Some(path) => Scenario::load_from_file(path)?,
                None => Scenario::player(),
            };
            if let (Some(email), Some(password)) = (admin_email, admin_password) {
                scenario = scenario.with_admin(email.as_str(), password.as_str());
            }
            let ctx = match credentials(cli) {
                Some(_) => login(cli, handle).await?,
                None => RequestContext::anonymous(),
            };
            Response::Seeded(handle.seed(ctx, scenario).await?)
        }
        command => {
            let ctx = login(cli, handle).await?;
            authenticated(command, ctx, handle).await?
        }
    };
    Ok(response)
}

async fn authenticated(
    command: &Command,
    ctx: RequestContext,
    handle: &RuntimeHandle,
) -> Result<Response, RuntimeError> {
    let response = match command {
        Command::Profile => Response::Account(handle.profile(ctx).await?),
        Command::Hamsters => Response::Hamsters(handle.hamsters(ctx).await?),
        Command::Hamster { id } => Response::Hamster(handle.hamster(ctx, HamsterId(*id)).await?),
        Command::Feed { id } => Response::Action(handle.feed(ctx, HamsterId(*id)).await?),
        Command::Sell { id } => Response::Action(handle.sell(ctx, HamsterId(*id)).await?),
        Command::Reproduce { first, second } => Response::Action(
            handle
                .reproduce(ctx, HamsterId(*first), HamsterId(*second))
                .await?,
        ),
        Command::Sleep { days } => Response::Action(handle.sleep(ctx, *days).await?),
        Command::Rename { id, name } => {
            Response::Action(handle.rename(ctx, HamsterId(*id), name.as_str()).await?)
        }
        Command::DeleteAccount { id } => {
            Response::Deleted(handle.delete_account(ctx, AccountId(*id)).await?)
        }
        Command::Register | Command::Seed { .. } => {
            return Err(RuntimeError::InvalidArgument(
                "command does not take a session".to_string(),
            ));
        }
    };
    Ok(response)
}

fn credentials(cli: &Cli) -> Option<(&str, &str)> {
    Some((cli.email.as_deref()?, cli.password.as_deref()?))
}

async fn login(cli: &Cli, handle: &RuntimeHandle) -> Result<RequestContext, RuntimeError> {
    let (email, password) = credentials(cli).ok_or(RuntimeError::Unauthenticated)?;
    handle.login(email, password).await
}
