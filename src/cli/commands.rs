use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect an index report: summary, consistency checks, issues
    Inspect(InspectArgs),

    /// Run consistency checks only; exit 1 on issues at or above --fail-on
    Validate(ValidateArgs),

    /// Print the embedded sample index report as JSON
    Sample,

    /// Initialize a .lamina.toml config file in the current directory
    Init,

    /// List all available report checks
    ListChecks,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Path to the index report JSON file
    pub path: PathBuf,

    /// Output format: "terminal" or "json"
    #[arg(short, long, default_value = "terminal")]
    pub format: String,

    /// Write the inspection report to file (JSON)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Fail (exit code 1) if issues at or above this severity are found.
    /// Values: ERROR, WARNING
    #[arg(long)]
    pub fail_on: Option<String>,

    /// Checks to run (comma-separated). Default: all
    #[arg(long)]
    pub checks: Option<String>,

    /// Check the report exactly as written, without normalizing first
    #[arg(long)]
    pub no_normalize: bool,

    /// Ignore .lamina.toml config files near the report
    #[arg(long)]
    pub no_config: bool,
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Path to the index report JSON file
    pub path: PathBuf,

    /// Fail (exit code 1) if issues at or above this severity are found.
    /// Values: ERROR, WARNING
    #[arg(long, default_value = "ERROR")]
    pub fail_on: String,

    /// Checks to run (comma-separated). Default: all
    #[arg(long)]
    pub checks: Option<String>,

    /// Ignore .lamina.toml config files near the report
    #[arg(long)]
    pub no_config: bool,
}
