//! Final file output and usage reporting for a finished run.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::core::models::AreaKey;
use crate::errors::ReportError;
use crate::usage::UsageEstimate;

/// Output filename derived from the area key, e.g.
/// `postcode_summary_sw72bu.md`.
#[must_use]
pub fn output_path(dir: &Path, area: &AreaKey) -> PathBuf {
    dir.join(format!("postcode_summary_{area}.md"))
}

/// Refuse to clobber an earlier run's report. Called before any fetch so
/// a conflicting run aborts without touching the network.
pub fn ensure_fresh_output(path: &Path) -> Result<(), ReportError> {
    if path.exists() {
        return Err(ReportError::OutputConflict(path.display().to_string()));
    }
    Ok(())
}

/// Write the report file. Creation is exclusive, so even a race with
/// another run cannot overwrite an existing report.
pub fn write_report(path: &Path, area: &AreaKey, report: &str) -> Result<(), ReportError> {
    let body = format!("# Postcode Summary for {area}\n\n{report}\n");

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ReportError::OutputConflict(path.display().to_string()),
            _ => ReportError::IoError(format!("creating {}: {}", path.display(), e)),
        })?;

    file.write_all(body.as_bytes())
        .map_err(|e| ReportError::IoError(format!("writing {}: {}", path.display(), e)))?;
    Ok(())
}

/// Human-readable token/cost block printed to stdout after a run.
#[must_use]
pub fn format_usage(usage: &UsageEstimate) -> String {
    format!(
        "\n## Token Usage Statistics\n\
         - Input tokens (approx): {} (${:.2})\n\
         - Output tokens (approx): {} (${:.2})\n\
         - Total inference cost: ${:.2}\n",
        usage.input_tokens,
        usage.input_cost,
        usage.output_tokens,
        usage.output_cost,
        usage.total_cost()
    )
}
