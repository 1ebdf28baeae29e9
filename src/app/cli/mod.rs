//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::{Verb, api, logging};

#[derive(Parser)]
#[command(name = "drenv")]
#[command(version)]
#[command(about = "Start, stop, and delete multi-cluster minikube test environments", long_about = None)]
struct Cli {
    /// Be more verbose
    #[arg(short, long)]
    verbose: bool,
    /// Command to run
    #[arg(value_enum)]
    command: Verb,
    /// Environment filename
    filename: PathBuf,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = api::execute(cli.command, &cli.filename) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
