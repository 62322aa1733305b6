//! Bank Queue Simulator
//!
//! A single-server queueing simulation: customers arrive at uniformly random
//! intervals, are served one at a time in arrival order, and per-customer
//! timing metrics are computed and reported.
//!
//! # Overview
//!
//! The engine turns a stream of uniform draws into a consistent timeline of
//! arrivals, service starts and service ends. Everything it produces is a
//! [`CustomerRecord`]; the run as a whole can be summarised with
//! [`QueueStatistics`] and printed with [`report::write_table`].
//!
//! ## Quick Start
//!
//! ```rust
//! use bank_queue_simulator::*;
//!
//! let config = SimulationConfig {
//!     customer_count: 30,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let orchestrator = SimulationOrchestrator::new(config)?;
//! let run = orchestrator.run()?;
//!
//! println!("{}", report::render_table(&run.records));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Customer records and configuration
//! - [`simulation`]: Engine, random sources, orchestration, statistics, logging
//! - [`report`]: Fixed-width table output
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod report;
pub mod simulation;
pub mod types;

pub use types::{
    CliArgs, ConfigError, ConfigValidationError, CustomerRecord, ServerState, SimulationConfig,
    TimeRange,
};

pub use simulation::{
    LoggingConfig, QueueStatistics, RandomSource, RngSource, SimulationEngine, SimulationError,
    SimulationOrchestrator, SimulationResult, SimulationRun, TimeGenerator, UniformTimeGenerator,
};
