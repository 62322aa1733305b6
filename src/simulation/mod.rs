//! Simulation engine and control
//!
//! This module contains the queue simulation engine, its random sources,
//! the run orchestrator, statistics collection, logging and error handling.
//!
//! # Overview
//!
//! - **SimulationEngine**: Sequential fold producing one record per customer
//! - **RandomSource / TimeGenerator**: Swappable uniform draws and the time
//!   quantities derived from them
//! - **SimulationOrchestrator**: Validates configuration and drives a run
//! - **QueueStatistics**: Aggregate metrics over a finished run
//! - **SimulationError**: Error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use bank_queue_simulator::simulation::*;
//! use bank_queue_simulator::types::*;
//!
//! let config = SimulationConfig { customer_count: 5, seed: Some(1), ..Default::default() };
//! let records = SimulationEngine::from_config(&config).run(5).unwrap();
//! assert_eq!(records.len(), 5);
//!
//! let stats = QueueStatistics::from_records(&records);
//! assert_eq!(stats.customers, 5);
//! ```

pub mod engine;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod random;
pub mod statistics;

// Re-export all public types for convenience
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use random::*;
pub use statistics::*;
