//! The cleaning pipeline driver.
//!
//! A strict linear sequence: Load → Dedup → Impute → Normalize → Write. Each
//! stage runs exactly once; the first load or write failure aborts the run
//! and partial outputs are not considered valid. Stages return their own
//! audit contributions and the driver folds them into one [`Audit`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use sweep_clean::{drop_duplicate_rows, fill_missing, normalize};
use sweep_ingest::read_table;
use sweep_model::Audit;
use sweep_report::{REPORT_FILENAME, cleaned_output_path, write_cleaned, write_report};

/// Inputs of one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Path to the tabular file to clean.
    pub input: PathBuf,
    /// Directory for the cleaned file and report; the input's directory
    /// when unset.
    pub output_dir: Option<PathBuf>,
}

/// Outputs of one successful cleaning run.
#[derive(Debug)]
pub struct CleanResult {
    pub audit: Audit,
    pub cleaned_path: PathBuf,
    pub report_path: PathBuf,
}

/// Run the whole pipeline for one input file.
pub fn run_clean(options: &CleanOptions) -> Result<CleanResult> {
    let output_dir = resolve_output_dir(options);

    let table = read_table(&options.input).context("load input")?;
    info!(path = %options.input.display(), rows = table.height(), "input file loaded");
    let mut audit = Audit::for_input(table.height(), table.width(), table.missing_count());

    let deduped = drop_duplicate_rows(&table);
    audit.duplicates_removed = deduped.removed;
    audit.absorb(deduped.outcome);

    let imputed = fill_missing(&deduped.table);
    audit.nan_counts_after = imputed.missing_after;
    audit.absorb(imputed.outcome);

    let normalized = normalize(&imputed.table);
    audit.absorb(normalized.outcome);

    let cleaned_path = cleaned_output_path(&options.input, &output_dir);
    write_cleaned(&normalized.table, &cleaned_path).context("write cleaned file")?;
    info!(path = %cleaned_path.display(), "cleaned file saved");

    write_report(&audit, &output_dir).context("write report")?;
    let report_path = output_dir.join(REPORT_FILENAME);
    info!(path = %report_path.display(), "report generated");

    Ok(CleanResult {
        audit,
        cleaned_path,
        report_path,
    })
}

fn resolve_output_dir(options: &CleanOptions) -> PathBuf {
    match &options.output_dir {
        Some(dir) => dir.clone(),
        None => options
            .input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    }
}
