//! High-level runtime orchestrator.
//!
//! The runtime owns the game worker, wires up command/event channels, and
//! exposes a builder-based API for clients.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use hamster_core::GameConfig;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::repository::{FileRepository, GameRepository, InMemoryRepository};
use crate::scenario::Scenario;
use crate::workers::GameWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Base seed mixed into every action's randomness. Drawn from entropy
    /// unless `HAMSTER_GAME_SEED` pins it.
    pub game_seed: u64,
    /// Directory of the file repository. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed the default player fixture on start.
    pub seed_fixtures: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            game_seed: rand::random(),
            data_dir: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed_fixtures: false,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by `HAMSTER_*` environment variables.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("HAMSTER_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(seed) = read_env::<u64>("HAMSTER_GAME_SEED") {
            config.game_seed = seed;
        }
        if let Some(capacity) = read_env::<usize>("HAMSTER_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("HAMSTER_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(enable) = read_env::<bool>("HAMSTER_SEED_FIXTURES") {
            config.seed_fixtures = enable;
        }
        if let Some(gold) = read_env::<i64>("HAMSTER_STARTING_GOLD") {
            config.game_config.starting_gold = gold;
        }
        if let Some(payout) = read_env::<i64>("HAMSTER_SELL_PAYOUT") {
            config.game_config.sell_payout = payout;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that owns the game worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker drains queued commands and exits once every handle clone
    /// has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Arc<dyn GameRepository>>,
    scenario: Option<Scenario>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
            scenario: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an existing repository instead of the one implied by the config
    pub fn repository(mut self, repository: Arc<dyn GameRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Seed this scenario before the worker starts
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Open the repository, seed fixtures and spawn the worker.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            config,
            repository,
            scenario,
        } = self;

        let repository = match (repository, &config.data_dir) {
            (Some(repository), _) => repository,
            (None, Some(dir)) => Arc::new(FileRepository::open(dir)?) as Arc<dyn GameRepository>,
            (None, None) => Arc::new(InMemoryRepository::new()) as Arc<dyn GameRepository>,
        };

        let scenario = match scenario {
            Some(scenario) => Some(scenario),
            None if config.seed_fixtures => Some(Scenario::player()),
            None => None,
        };
        if let Some(scenario) = scenario {
            let report = scenario.apply(repository.as_ref(), &crate::auth::PasswordHasher)?;
            tracing::debug!(?report, "Applied scenario");
        }

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let worker = GameWorker::new(
            repository,
            config.game_config.clone(),
            config.game_seed,
            command_rx,
            event_bus.clone(),
        );
        let worker_handle = tokio::spawn(worker.run());

        tracing::info!(
            data_dir = ?config.data_dir,
            game_seed = config.game_seed,
            "Runtime started"
        );

        Ok(Runtime {
            handle: RuntimeHandle::new(command_tx, event_bus),
            worker_handle,
        })
    }
}
