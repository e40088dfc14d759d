use crate::checks;

/// List all available report checks
pub fn list_checks() {
    println!();
    println!("🪨 Lamina — Available Report Checks");
    println!("{}", "━".repeat(55));
    println!();

    let all_checks = checks::all_checks();

    for check in &all_checks {
        println!("  📋 {} ", check.name());
        println!("     {}", check.description());
        println!();
    }

    println!("{}", "━".repeat(55));
    println!("  {} checks loaded", all_checks.len());
    println!();
    println!("  Run `lamina inspect report.json` to inspect a report");
    println!("  Run `lamina inspect report.json --checks references` to run specific checks");
    println!();
}
