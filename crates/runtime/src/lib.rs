//! Runtime orchestration for the hamster game.
//!
//! This crate wires together repositories, the access boundary and the game
//! worker into a cohesive runtime API. Consumers embed [`Runtime`] and
//! interact with accounts and hamsters through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`auth`] resolves credentials into a per-request context
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`repository`] persists accounts and hamsters
//! - [`scenario`] seeds fixture accounts
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod auth;
pub mod events;
pub mod repository;
pub mod runtime;
pub mod scenario;

mod workers;

pub use api::{
    AccountView, ActionReceipt, BLOCKED_MESSAGE, DeletionReceipt, ErrorKind, HamsterView, Result,
    RuntimeError, RuntimeHandle,
};
pub use auth::{Identity, PasswordHasher, RequestContext};
pub use events::{EventBus, GameEvent, Topic};
pub use repository::{
    CommitReceipt, FileRepository, GameRepository, InMemoryRepository, RepositoryError, Tables,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scenario::{AccountFixture, HamsterFixture, Scenario, SeedReport};
