use anyhow::Result;
use crate::report::issue::InspectionReport;

/// Render an inspection report as pretty-printed JSON
pub fn render(report: &InspectionReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}
