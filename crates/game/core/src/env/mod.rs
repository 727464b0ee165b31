//! Read-only facts handed to every action.
//!
//! The [`Env`] aggregate bundles rule configuration and the randomness
//! source so transitions never reach for global state.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::GameConfig;

/// Aggregates the read-only collaborators required by the action pipeline.
pub struct Env<'a, R>
where
    R: RngOracle + ?Sized,
{
    config: &'a GameConfig,
    rng: &'a R,
    seed: u64,
}

impl<R> Clone for Env<'_, R>
where
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Env<'_, R> where R: RngOracle + ?Sized {}

pub type GameEnv<'a> = Env<'a, dyn RngOracle + 'a>;

impl<'a, R> Env<'a, R>
where
    R: RngOracle + ?Sized,
{
    /// `seed` must be unique per executed action; see [`compute_seed`].
    pub fn new(config: &'a GameConfig, rng: &'a R, seed: u64) -> Self {
        Self { config, rng, seed }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }

    /// Seed for the `context`-th independent roll of the current action.
    pub fn roll_seed(&self, context: u32) -> u64 {
        self.seed ^ u64::from(context).wrapping_mul(0x9e37_79b9_7f4a_7c15)
    }
}

impl<'a> GameEnv<'a> {
    /// Erases the concrete oracle type.
    pub fn from_parts<R>(config: &'a GameConfig, rng: &'a R, seed: u64) -> Self
    where
        R: RngOracle + 'a,
    {
        Env::new(config, rng as &dyn RngOracle, seed)
    }
}
