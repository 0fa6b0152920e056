use clap::Parser;
use log::info;
use simops::output;
use simops::reporters::BackupReporter;
use simops::runtime::{SystemClock, ThreadWaiter};

/// Command-line arguments for the database-backup simulator
#[derive(Parser)]
#[command(
    name = "db_backup",
    about = "Prints a simulated database backup record as one JSON line"
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

    info!("Running simulated database backup");

    let reporter = BackupReporter::new(SystemClock, ThreadWaiter);
    let record = reporter.run(&mut rand::thread_rng());

    std::process::exit(output::emit(&record));
}
