use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::checks::{self, ReportCheck};
use crate::cli::{Cli, InspectArgs};
use crate::config::LaminaConfig;
use crate::loader;
use crate::report::issue::{self, InspectionReport, InspectionSummary};
use crate::report::normalize;

/// The core inspection engine. Orchestrates report loading,
/// normalization, check dispatch, and summary generation.
pub struct Inspector {
    /// Report file to inspect
    source: PathBuf,
    /// Checks to run
    checks: Vec<Box<dyn ReportCheck>>,
    /// Normalize the report before running checks
    normalize: bool,
}

impl Inspector {
    pub fn new(_cli: &Cli, args: &InspectArgs) -> Result<Self> {
        Self::with_options(
            &args.path,
            args.checks.as_deref(),
            !args.no_normalize,
            args.no_config,
        )
    }

    /// Build an inspector from explicit options. `validate` uses this
    /// directly since it never normalizes before checking.
    pub fn with_options(
        path: &Path,
        check_names: Option<&str>,
        normalize: bool,
        no_config: bool,
    ) -> Result<Self> {
        // Load optional config from the report's directory upward
        let config = if no_config {
            None
        } else {
            path.parent().and_then(LaminaConfig::load)
        };

        // Determine which checks to run
        let mut selected = if let Some(names) = check_names {
            checks::checks_by_names(names)
        } else {
            checks::all_checks()
        };
        if let Some(ref cfg) = config {
            selected.retain(|c| {
                !cfg.inspect.disable.iter().any(|d| d.eq_ignore_ascii_case(c.name()))
            });
        }

        info!(
            "Loaded {} checks: {}",
            selected.len(),
            selected.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
        );

        let normalize = normalize && config.as_ref().is_none_or(|c| c.inspect.normalize);

        Ok(Inspector {
            source: path.to_path_buf(),
            checks: selected,
            normalize,
        })
    }

    /// Run the full inspection pipeline
    pub fn run(&self) -> Result<InspectionReport> {
        let start = Instant::now();

        info!("Loading index report from {}", self.source.display());
        let mut report = loader::from_file(&self.source)
            .with_context(|| format!("loading index report {}", self.source.display()))?;

        if !report.success && !report.err.is_empty() {
            warn!("Report marked unsuccessful by the indexer: {}", report.err);
        }

        if self.normalize {
            normalize::normalize(&mut report);
        }

        let mut issues = Vec::new();
        for check in &self.checks {
            let found = check.check(&report);
            debug!("Check {} produced {} issues", check.name(), found.len());
            issues.extend(found);
        }

        issue::sort_issues(&mut issues);

        info!("Inspection complete: {} issues", issues.len());

        let duration = start.elapsed();
        let summary = InspectionSummary::new(&report, &issues);

        Ok(InspectionReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: self.source.clone(),
            normalized: self.normalize,
            duration_ms: duration.as_millis() as u64,
            summary,
            issues,
        })
    }
}
