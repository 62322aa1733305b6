//! Main simulation orchestrator
//!
//! This module ties configuration, the random source, the engine and the
//! statistics together into a single run.

use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::simulation::{QueueStatistics, SimulationEngine, SimulationResult};
use crate::types::{CustomerRecord, SimulationConfig};

/// Output of one completed simulation run
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Customer records in arrival order
    pub records: Vec<CustomerRecord>,
    /// Aggregate metrics over `records`
    pub statistics: QueueStatistics,
    /// Wall-clock time taken by the engine
    pub elapsed: Duration,
}

/// Validates a configuration and runs the engine it describes
#[derive(Debug)]
pub struct SimulationOrchestrator {
    config: SimulationConfig,
    customer_count: usize,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator.
    ///
    /// Fails with `InvalidConfiguration` before any simulation work if the
    /// configuration does not validate.
    #[instrument(skip(config), fields(customer_count = config.customer_count, seed = ?config.seed))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        let customer_count = config.customer_count()?;

        match config.seed {
            Some(seed) => info!("Using deterministic seed: {}", seed),
            None => debug!("Using entropy-based random seed"),
        }

        Ok(Self { config, customer_count })
    }

    /// Run the simulation to completion
    pub fn run(&self) -> SimulationResult<SimulationRun> {
        let start = Instant::now();
        let records = SimulationEngine::from_config(&self.config).run(self.customer_count)?;
        let elapsed = start.elapsed();

        let statistics = QueueStatistics::from_records(&records);
        info!(
            customers = statistics.customers,
            waited = statistics.customers_who_waited,
            elapsed_us = elapsed.as_micros() as u64,
            "Simulation run finished"
        );

        Ok(SimulationRun { records, statistics, elapsed })
    }
}
