//! Single-server queue simulation engine
//!
//! The engine is a fold over customer indices. Each step draws the next
//! inter-arrival and service time, derives the customer's record from the
//! previous [`ServerState`], and carries the new state forward.

use tracing::{debug, info, instrument};

use super::error::{SimulationError, SimulationResult};
use super::random::{RngSource, TimeGenerator, UniformTimeGenerator};
use crate::types::{CustomerRecord, ServerState, SimulationConfig};

/// Upper limit on records reserved up front; longer runs grow as they go
const MAX_PREALLOCATED_RECORDS: usize = 1 << 16;

/// Sequential single-server queue simulation
#[derive(Debug)]
pub struct SimulationEngine<G> {
    generator: G,
}

impl SimulationEngine<UniformTimeGenerator<RngSource>> {
    /// Build an engine from a configuration, seeding the random source when
    /// the configuration carries a seed
    pub fn from_config(config: &SimulationConfig) -> Self {
        let source = RngSource::from_seed_option(config.seed);
        Self::new(UniformTimeGenerator::from_config(source, config))
    }
}

impl<G: TimeGenerator> SimulationEngine<G> {
    /// Create an engine drawing times from `generator`
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Simulate `customer_count` customers in arrival order.
    ///
    /// Customer 0 draws a service time only; every later customer draws an
    /// inter-arrival time and then a service time. Any failure discards the
    /// records built so far, including a clock that stops being finite.
    #[instrument(skip(self))]
    pub fn run(&mut self, customer_count: usize) -> SimulationResult<Vec<CustomerRecord>> {
        if customer_count == 0 {
            return Err(SimulationError::invalid_configuration(
                "customer count must be at least 1",
            ));
        }

        let mut records = Vec::with_capacity(customer_count.min(MAX_PREALLOCATED_RECORDS));

        let first = ensure_finite(CustomerRecord::first(self.generator.service_time()?), 0)?;
        records.push(first);

        let last_state = (1..customer_count).try_fold(
            ServerState::from(&first),
            |state, index| -> SimulationResult<ServerState> {
                let inter_arrival_time = self.generator.inter_arrival_time()?;
                let service_time = self.generator.service_time()?;
                let record = ensure_finite(
                    CustomerRecord::after(state, inter_arrival_time, service_time),
                    index,
                )?;

                debug!(
                    customer = index + 1,
                    arrival = record.arrival_time,
                    start = record.service_start_time,
                    end = record.service_end_time,
                    waited = record.waited(),
                    "customer served"
                );

                records.push(record);
                Ok(ServerState::from(&record))
            },
        )?;

        info!(
            customers = records.len(),
            makespan = last_state.service_end_time,
            "simulation completed"
        );

        Ok(records)
    }

    /// Give back the time generator
    pub fn into_generator(self) -> G {
        self.generator
    }
}

/// Reject records whose clock overflowed; later times would be `inf` or `NaN`
fn ensure_finite(record: CustomerRecord, index: usize) -> SimulationResult<CustomerRecord> {
    if record.arrival_time.is_finite()
        && record.service_end_time.is_finite()
        && record.time_in_system.is_finite()
    {
        Ok(record)
    } else {
        Err(SimulationError::invalid_configuration(format!(
            "simulated clock is no longer finite at customer {}",
            index + 1
        )))
    }
}
