//! Entry point for the duanju binary

use clap::Parser;
use duanju_cli::commands::Commands;

/// Quote-aware sentence segmentation for mixed Chinese and English text
#[derive(Debug, Parser)]
#[command(name = "duanju", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
