//! Error types and handling
//!
//! This module contains error types and error handling for the simulation.

use thiserror::Error;

use crate::types::ConfigValidationError;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Customer count or another configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The random source could not produce a draw
    #[error("Random source failure: {0}")]
    RandomSourceFailure(String),

    /// I/O error while writing the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::InvalidConfiguration(error.to_string())
    }
}

impl From<rand::Error> for SimulationError {
    fn from(error: rand::Error) -> Self {
        SimulationError::RandomSourceFailure(error.to_string())
    }
}

impl SimulationError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a random source failure
    pub fn random_source_failure(msg: impl Into<String>) -> Self {
        Self::RandomSourceFailure(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// Every failure aborts the run: the record sequence depends on its full
    /// history, so there is nothing to resume from.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::InvalidConfiguration(_) => false,
            SimulationError::RandomSourceFailure(_) => false,
            SimulationError::Io(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidConfiguration(_) => "Configuration",
            SimulationError::RandomSourceFailure(_) => "Random Source",
            SimulationError::Io(_) => "IO",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
