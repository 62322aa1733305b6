//! Core types for the bank queue simulator
//!
//! This module contains the customer record produced by the engine and the
//! configuration structures used throughout the simulation system.
//!
//! # Overview
//!
//! - **Records**: [`CustomerRecord`] and the [`ServerState`] fold accumulator
//! - **Configuration**: Simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use bank_queue_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     customer_count: 10,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! let first = CustomerRecord::first(2.0);
//! let second = CustomerRecord::after(ServerState::from(&first), 1.0, 0.5);
//! assert_eq!(second.waiting_time, 1.0);
//! ```

pub mod config;
pub mod record;

// Re-export all public types for convenience
pub use config::*;
pub use record::*;
