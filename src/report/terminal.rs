use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

use crate::report::issue::{InspectionReport, Severity};

/// Render an inspection report to the terminal with colors
pub fn render(report: &InspectionReport) {
    println!();
    println!(
        "{}  Lamina v{} — Inspected {} in {:.2}s",
        "🔍".bold(),
        report.version,
        report.source.display(),
        report.duration_ms as f64 / 1000.0
    );
    println!();

    let summary = &report.summary;
    println!(
        "  {} packages · {} distributions · {} repositories · {} layers",
        summary.packages.to_string().bold(),
        summary.distributions,
        summary.repositories,
        summary.layers,
    );

    if !summary.source_types.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Source type", "Packages"]);
        for (source_type, count) in &summary.source_types {
            table.add_row(vec![source_type.clone(), count.to_string()]);
        }
        println!();
        for line in table.to_string().lines() {
            println!("  {line}");
        }
    }
    println!();

    if report.issues.is_empty() {
        println!("  {}  Report is consistent — no issues found!", "✅".bold());
        println!();
        return;
    }

    // Print each issue
    for issue in &report.issues {
        let severity_display = format!(" {} ", issue.severity);
        let severity_colored = match issue.severity {
            Severity::Error => severity_display.on_red().white().bold().to_string(),
            Severity::Warning => severity_display.on_yellow().black().bold().to_string(),
        };

        println!(
            "  {}  {} {}",
            severity_colored,
            issue.code.dimmed(),
            format!("({})", issue.check).dimmed(),
        );
        println!("           {}", issue.message.bold());
        println!();
    }

    // Summary bar
    println!("{}", "━".repeat(60));

    let mut summary_parts = Vec::new();
    if summary.errors > 0 {
        summary_parts.push(format!("{} errors", summary.errors).red().bold().to_string());
    }
    if summary.warnings > 0 {
        summary_parts.push(format!("{} warnings", summary.warnings).yellow().to_string());
    }

    println!(
        " Found {} issues: {}",
        report.issues.len().to_string().bold(),
        summary_parts.join(", ")
    );

    println!("{}", "━".repeat(60));
    println!();
}
