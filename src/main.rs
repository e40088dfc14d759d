use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lamina::cli::{self, Cli};
use lamina::config;
use lamina::engine::Inspector;
use lamina::fixtures;
use lamina::listing;
use lamina::report::{self, issue::Severity};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("lamina=debug")
    } else if cli.quiet {
        EnvFilter::new("lamina=error")
    } else {
        EnvFilter::new("lamina=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    info!("Lamina v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        cli::Commands::Inspect(args) => {
            let inspector = Inspector::new(&cli, args)?;
            let report = inspector.run()?;

            // Output the inspection report
            match args.format.as_str() {
                "json" => {
                    let output = report::json::render(&report)?;
                    if let Some(ref path) = args.out {
                        std::fs::write(path, &output)?;
                        info!("Inspection report written to {}", path.display());
                    } else {
                        println!("{}", output);
                    }
                }
                _ => {
                    report::terminal::render(&report);
                    if let Some(ref path) = args.out {
                        let json_output = report::json::render(&report)?;
                        std::fs::write(path, &json_output)?;
                        info!("JSON report also written to {}", path.display());
                    }
                }
            }

            // Exit code based on issues
            if let Some(ref fail_on) = args.fail_on {
                let threshold = Severity::from_str(fail_on);
                if report.has_issues_at_or_above(threshold) {
                    std::process::exit(1);
                }
            }
        }
        cli::Commands::Validate(args) => {
            // Validate checks the report exactly as written: no
            // normalization pass in front of the checks.
            let inspector =
                Inspector::with_options(&args.path, args.checks.as_deref(), false, args.no_config)?;
            let report = inspector.run()?;

            report::terminal::render(&report);

            let threshold = Severity::from_str(&args.fail_on);
            if report.has_issues_at_or_above(threshold) {
                std::process::exit(1);
            }
        }
        cli::Commands::Sample => {
            // Re-serialized through the model, so the output is the
            // normalized snake_case shape.
            let report = fixtures::index_report();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        cli::Commands::Init => {
            config::init_config()?;
        }
        cli::Commands::ListChecks => {
            listing::list_checks();
        }
    }

    Ok(())
}
