//! fibseq - Fibonacci sequence generator
//!
//! Prints Fibonacci numbers from the command line. The sequence itself is
//! computed by the `fibseq` library; this binary only handles arguments,
//! configuration and display.

use clap::Parser;
use fibseq::commands::Commands;
use fibseq::common::{config::Config, logging};
use fibseq::{cli, Result};

#[derive(Parser)]
#[command(name = "fibseq", about = "Fibonacci sequence generator")]
#[command(version, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    cli::dispatch(cli.command, &config)
}

fn main() {
    let cli = Cli::parse();
    logging::init_cli(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
