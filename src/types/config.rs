//! Configuration structures for the bank queue simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the size of a run and the bounds of its uniform time draws.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default simulation constants
pub mod defaults {
    /// Number of customers simulated when no count is given
    pub const CUSTOMER_COUNT: i64 = 30;

    /// Largest customer count a single run accepts
    pub const MAX_CUSTOMER_COUNT: i64 = 10_000_000;

    /// Largest bound accepted for either time range
    pub const MAX_TIME_BOUND: f64 = 1.0e6;

    /// Lower bound of the inter-arrival time draw
    pub const INTER_ARRIVAL_MIN: f64 = 0.3;

    /// Upper bound (exclusive) of the inter-arrival time draw
    pub const INTER_ARRIVAL_MAX: f64 = 2.0;

    /// Lower bound of the service time draw
    pub const SERVICE_MIN: f64 = 0.2;

    /// Upper bound (exclusive) of the service time draw
    pub const SERVICE_MAX: f64 = 3.0;
}

/// Half-open interval `[min, max)` a uniform time draw is scaled into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
}

impl TimeRange {
    /// Create a new range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Scale a uniform draw in `[0, 1)` into this range.
    ///
    /// Rounding can land exactly on `max` for very narrow ranges; such
    /// results are pulled back to the largest value below `max`.
    pub fn sample(&self, draw: f64) -> f64 {
        let value = self.min + self.span() * draw;
        if value < self.max {
            value
        } else {
            largest_below(self.max).max(self.min)
        }
    }

    /// Whether a value lies inside `[min, max)`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Largest finite `f64` strictly below `value`
fn largest_below(value: f64) -> f64 {
    if value == 0.0 {
        -f64::from_bits(1)
    } else if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else {
        f64::from_bits(value.to_bits() + 1)
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bank-queue-simulator",
    version = "0.1.0",
    about = "Bank Queue Simulator - Single-server teller queue with per-customer timing metrics",
    long_about = "Simulates customers arriving at a single bank teller, served in arrival order, and prints a table of inter-arrival, arrival, service, waiting, in-system and idle times for every customer.

EXAMPLES:
    # Run with default settings (30 customers)
    bank-queue-simulator

    # Reproducible run
    bank-queue-simulator --count 100 --seed 42

    # Use a configuration file
    bank-queue-simulator --config config.json

    # Generate configuration template
    bank-queue-simulator --print-config > my-config.json

    # Validate configuration without running
    bank-queue-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of customers to simulate
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Number of customers to simulate",
        long_help = "Number of customers to simulate. Must be between 1 and 10000000. Default: 30"
    )]
    pub count: Option<i64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Lower bound of the inter-arrival time draw
    #[arg(long, allow_negative_numbers = true, help = "Minimum inter-arrival time")]
    pub inter_arrival_min: Option<f64>,

    /// Upper bound of the inter-arrival time draw
    #[arg(long, allow_negative_numbers = true, help = "Maximum inter-arrival time (exclusive)")]
    pub inter_arrival_max: Option<f64>,

    /// Lower bound of the service time draw
    #[arg(long, allow_negative_numbers = true, help = "Minimum service time")]
    pub service_min: Option<f64>,

    /// Upper bound of the service time draw
    #[arg(long, allow_negative_numbers = true, help = "Maximum service time (exclusive)")]
    pub service_max: Option<f64>,

    /// Print run statistics after the table
    #[arg(long, help = "Print a summary of queue statistics to stderr")]
    pub summary: bool,

    /// Directory for daily rolling log files
    #[arg(
        long,
        help = "Also write logs to daily rolling files in this directory",
        long_help = "Also write JSON logs to daily rolling files in this directory. Console logs still go to stderr."
    )]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, help = "Emit console logs as JSON")]
    pub json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of customers to simulate
    pub customer_count: Option<i64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Bounds of the inter-arrival time draw
    pub inter_arrival_range: Option<TimeRange>,

    /// Bounds of the service time draw
    pub service_time_range: Option<TimeRange>,

    /// Print run statistics after the table
    pub summary: Option<bool>,
}

/// Configuration for a queue simulation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Number of customers to simulate
    pub customer_count: i64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Bounds of the inter-arrival time draw
    pub inter_arrival_range: TimeRange,

    /// Bounds of the service time draw
    pub service_time_range: TimeRange,

    /// Print run statistics after the table
    pub summary: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigValidationError {
    /// Customer count is invalid
    #[error("Customer count must be between 1 and {max}, got {count}")]
    InvalidCustomerCount {
        /// Requested count
        count: i64,
        /// Largest accepted count
        max: i64,
    },

    /// A time range has bounds that are not finite, not ordered or too large
    #[error("Invalid {field} range: min ({min}) must be < max ({max}) and max must not exceed {limit}")]
    InvalidRange {
        /// Name of the range field
        field: String,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
        /// Largest accepted bound
        limit: f64,
    },

    /// A time range allows values the queue model cannot accept
    #[error("Invalid {field} minimum: {min} (must be {requirement})")]
    InvalidMinimum {
        /// Name of the range field
        field: String,
        /// Offending lower bound
        min: f64,
        /// Human readable requirement
        requirement: &'static str,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            customer_count: defaults::CUSTOMER_COUNT,
            seed: None,
            inter_arrival_range: TimeRange::new(
                defaults::INTER_ARRIVAL_MIN,
                defaults::INTER_ARRIVAL_MAX,
            ),
            service_time_range: TimeRange::new(defaults::SERVICE_MIN, defaults::SERVICE_MAX),
            summary: false,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            customer_count: config_file.customer_count.unwrap_or(defaults.customer_count),
            seed: config_file.seed.or(defaults.seed),
            inter_arrival_range: config_file
                .inter_arrival_range
                .unwrap_or(defaults.inter_arrival_range),
            service_time_range: config_file
                .service_time_range
                .unwrap_or(defaults.service_time_range),
            summary: config_file.summary.unwrap_or(defaults.summary),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.count {
            config.customer_count = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.inter_arrival_min {
            config.inter_arrival_range.min = value;
        }
        if let Some(value) = args.inter_arrival_max {
            config.inter_arrival_range.max = value;
        }
        if let Some(value) = args.service_min {
            config.service_time_range.min = value;
        }
        if let Some(value) = args.service_max {
            config.service_time_range.max = value;
        }
        if args.summary {
            config.summary = true;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(1..=defaults::MAX_CUSTOMER_COUNT).contains(&self.customer_count) {
            return Err(self.invalid_customer_count());
        }

        Self::validate_range("inter_arrival", &self.inter_arrival_range)?;
        Self::validate_range("service_time", &self.service_time_range)?;

        if self.inter_arrival_range.min < 0.0 {
            return Err(ConfigValidationError::InvalidMinimum {
                field: "inter_arrival".to_string(),
                min: self.inter_arrival_range.min,
                requirement: ">= 0.0",
            });
        }

        if self.service_time_range.min <= 0.0 {
            return Err(ConfigValidationError::InvalidMinimum {
                field: "service_time".to_string(),
                min: self.service_time_range.min,
                requirement: "> 0.0",
            });
        }

        Ok(())
    }

    /// Helper method to validate range bounds
    fn validate_range(field: &str, range: &TimeRange) -> Result<(), ConfigValidationError> {
        let in_bounds = range.min.is_finite()
            && range.max.is_finite()
            && range.min < range.max
            && range.max <= defaults::MAX_TIME_BOUND;
        if !in_bounds {
            return Err(ConfigValidationError::InvalidRange {
                field: field.to_string(),
                min: range.min,
                max: range.max,
                limit: defaults::MAX_TIME_BOUND,
            });
        }
        Ok(())
    }

    fn invalid_customer_count(&self) -> ConfigValidationError {
        ConfigValidationError::InvalidCustomerCount {
            count: self.customer_count,
            max: defaults::MAX_CUSTOMER_COUNT,
        }
    }

    /// Customer count as a `usize`, once validated
    pub fn customer_count(&self) -> Result<usize, ConfigValidationError> {
        if !(1..=defaults::MAX_CUSTOMER_COUNT).contains(&self.customer_count) {
            return Err(self.invalid_customer_count());
        }
        usize::try_from(self.customer_count).map_err(|_| self.invalid_customer_count())
    }
}
