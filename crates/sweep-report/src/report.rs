//! Cleaning report rendering.
//!
//! The report is a pure function of the audit record: same audit, same
//! bytes. No timestamps, no run-dependent fields.

use std::path::Path;

use tracing::debug;

use sweep_model::{Audit, WriteError};

/// Fixed report filename, written next to the cleaned file.
pub const REPORT_FILENAME: &str = "README.md";

/// Render the audit record into the Markdown cleaning report.
pub fn render_report(audit: &Audit) -> String {
    let mut lines = Vec::new();
    lines.push("# Cleaning Report".to_string());
    lines.push(String::new());
    lines.push("This report describes the cleaning performed on the input file.".to_string());
    lines.push(String::new());
    lines.push("## Summary".to_string());
    lines.push(String::new());
    lines.push(format!("- Original rows: {}", audit.original_rows));
    lines.push(format!("- Original columns: {}", audit.original_columns));
    lines.push(format!("- Duplicates removed: {}", audit.duplicates_removed));
    lines.push(format!("- NaNs before: {}", audit.nan_counts_before));
    lines.push(format!("- NaNs after: {}", audit.nan_counts_after));
    lines.push(String::new());
    lines.push("## Details".to_string());
    lines.push(String::new());
    for note in &audit.notes {
        lines.push(format!("- {note}"));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Write the report to [`REPORT_FILENAME`] under `output_dir`, overwriting
/// any existing report.
///
/// # Errors
///
/// Returns [`WriteError`] when the report file cannot be created or written.
pub fn write_report(audit: &Audit, output_dir: &Path) -> Result<(), WriteError> {
    let path = output_dir.join(REPORT_FILENAME);
    std::fs::write(&path, render_report(audit)).map_err(|source| WriteError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "wrote cleaning report");
    Ok(())
}
