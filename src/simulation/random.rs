//! Random draws for the queue simulation
//!
//! [`RandomSource`] is the swappable "next uniform value in `[0, 1)`" capability.
//! [`TimeGenerator`] turns those draws into inter-arrival and service times.

use rand::distributions::{Distribution, Standard};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fmt;
use tracing::trace;

use super::error::SimulationResult;
use crate::types::{SimulationConfig, TimeRange};

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Produce the next uniform draw
    fn next_uniform(&mut self) -> SimulationResult<f64>;
}

/// Random source backed by any [`RngCore`]
///
/// Draws go through `try_fill_bytes`, so a generator that reports an error
/// surfaces as [`SimulationError::RandomSourceFailure`](super::SimulationError)
/// instead of panicking.
pub struct RngSource {
    rng: Box<dyn RngCore>,
    draws: u64,
}

impl fmt::Debug for RngSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RngSource").field("draws", &self.draws).finish()
    }
}

impl RngSource {
    /// Create a source seeded from operating system entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a source with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Wrap an arbitrary generator
    pub fn from_rng(rng: impl RngCore + 'static) -> Self {
        Self { rng: Box::new(rng), draws: 0 }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Default for RngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for RngSource {
    fn next_uniform(&mut self) -> SimulationResult<f64> {
        let mut bytes = [0u8; 8];
        self.rng.try_fill_bytes(&mut bytes)?;
        self.draws += 1;
        // Replay the word through `Standard` so the f64 conversion is rand's own
        let mut word = StepRng::new(u64::from_le_bytes(bytes), 0);
        Ok(Standard.sample(&mut word))
    }
}

/// Produces the two time quantities the engine consumes
pub trait TimeGenerator {
    /// Time between the previous arrival and the next one
    fn inter_arrival_time(&mut self) -> SimulationResult<f64>;

    /// Time the server needs for one customer
    fn service_time(&mut self) -> SimulationResult<f64>;
}

/// Uniform inter-arrival and service times drawn from a [`RandomSource`]
#[derive(Debug)]
pub struct UniformTimeGenerator<S> {
    source: S,
    inter_arrival_range: TimeRange,
    service_time_range: TimeRange,
}

impl<S: RandomSource> UniformTimeGenerator<S> {
    /// Create a generator with explicit ranges
    pub fn new(source: S, inter_arrival_range: TimeRange, service_time_range: TimeRange) -> Self {
        Self { source, inter_arrival_range, service_time_range }
    }

    /// Create a generator using the ranges from a configuration
    pub fn from_config(source: S, config: &SimulationConfig) -> Self {
        Self::new(source, config.inter_arrival_range, config.service_time_range)
    }

    /// Bounds of the inter-arrival draw
    pub fn inter_arrival_range(&self) -> TimeRange {
        self.inter_arrival_range
    }

    /// Bounds of the service time draw
    pub fn service_time_range(&self) -> TimeRange {
        self.service_time_range
    }

    /// Give back the underlying source
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: RandomSource> TimeGenerator for UniformTimeGenerator<S> {
    fn inter_arrival_time(&mut self) -> SimulationResult<f64> {
        let draw = self.source.next_uniform()?;
        let value = self.inter_arrival_range.sample(draw);
        trace!(draw, value, "drew inter-arrival time");
        Ok(value)
    }

    fn service_time(&mut self) -> SimulationResult<f64> {
        let draw = self.source.next_uniform()?;
        let value = self.service_time_range.sample(draw);
        trace!(draw, value, "drew service time");
        Ok(value)
    }
}
