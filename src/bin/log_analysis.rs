use clap::Parser;
use log::info;
use simops::output;
use simops::reporters::LogAnalysisReporter;
use simops::runtime::SystemClock;

/// Command-line arguments for the log-analysis simulator
#[derive(Parser)]
#[command(
    name = "log_analysis",
    about = "Prints a simulated log-analysis summary as one JSON line"
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

    info!("Running simulated log file analysis");

    let reporter = LogAnalysisReporter::new(SystemClock);
    let summary = reporter.run(&mut rand::thread_rng());

    std::process::exit(output::emit(&summary));
}
