pub mod commands;

use clap::Parser;

pub use commands::{Commands, InspectArgs, ValidateArgs};

/// Lamina — container image index report toolkit
///
/// Inspects, validates, and normalizes the index reports a
/// vulnerability scanner's indexing stage produces.
#[derive(Parser, Debug)]
#[command(
    name = "lamina",
    version,
    about = "🪨 Lamina — container image index report toolkit",
    long_about = "Lamina reads the index reports a container image scanner produces.\nIt summarizes their contents, checks them for consistency, and\nnormalizes them for deterministic downstream processing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
