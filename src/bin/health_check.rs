use clap::Parser;
use log::info;
use simops::output;
use simops::reporters::HealthCheckReporter;
use simops::runtime::SystemClock;

/// Command-line arguments for the health-check simulator
#[derive(Parser)]
#[command(
    name = "health_check",
    about = "Prints a simulated system health snapshot as one JSON line"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(
        short,
        long,
        help = "Enable verbose logging output (sets RUST_LOG=debug)"
    )]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    info!("Running simulated system health check");

    let reporter = HealthCheckReporter::new(SystemClock);
    let snapshot = reporter.run();

    std::process::exit(output::emit(&snapshot));
}
