//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into sentences
    Segment(segment::SegmentArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("text      Plain text, one sentence per line");
                println!("json      JSON array of sentences");
                println!("markdown  Numbered markdown list with a total footer");
            }
        }
        Ok(())
    }
}
