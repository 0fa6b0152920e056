use clap::Parser;
use log::info;
use simops::output;
use simops::reporters::ActivityReporter;
use simops::runtime::SystemClock;

/// Command-line arguments for the user-activity simulator
#[derive(Parser)]
#[command(
    name = "activity_report",
    about = "Prints a simulated user activity report as one JSON line"
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

    info!("Running simulated user activity report");

    let reporter = ActivityReporter::new(SystemClock);
    let report = reporter.run(&mut rand::thread_rng());

    std::process::exit(output::emit(&report));
}
