// Bank Queue Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/bank-queue-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/bank-queue-simulator --count 100 --seed 42 --summary
// ```

use anyhow::Context;
use bank_queue_simulator::report;
use bank_queue_simulator::simulation::{LoggingConfig, SimulationOrchestrator};
use bank_queue_simulator::types::config::CliArgs;
use bank_queue_simulator::types::SimulationConfig;
use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = LoggingConfig::from_cli_args(&args).init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let dry_run = args.dry_run;

    let config = SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    let orchestrator = SimulationOrchestrator::new(config.clone())
        .context("Failed to initialize simulation")?;
    let simulation_run = orchestrator.run().context("Simulation failed")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report::write_table(&mut handle, &simulation_run.records)
        .context("Failed to write customer table")?;

    if config.summary {
        eprintln!();
        eprint!("{}", simulation_run.statistics);
        eprintln!("  Runtime: {:.3} ms", simulation_run.elapsed.as_secs_f64() * 1000.0);
    }

    info!("Bank Queue Simulator completed successfully");
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Customer Count: {}", config.customer_count);
    eprintln!(
        "  Inter-Arrival Time: [{:.2}, {:.2})",
        config.inter_arrival_range.min, config.inter_arrival_range.max
    );
    eprintln!(
        "  Service Time: [{:.2}, {:.2})",
        config.service_time_range.min, config.service_time_range.max
    );
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
