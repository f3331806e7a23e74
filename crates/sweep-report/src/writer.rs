//! Cleaned-table CSV output.

use std::path::{Path, PathBuf};

use tracing::debug;

use sweep_model::{CellValue, Table, WriteError};

/// Derive the cleaned-file path from the input: same stem with a `_cleaned`
/// suffix before the extension, placed in `output_dir`.
pub fn cleaned_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let name = match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_cleaned.{ext}"),
        None => format!("{stem}_cleaned"),
    };
    output_dir.join(name)
}

/// Render a float without a trailing `.0` when it is integral.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn render_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Missing => String::new(),
        CellValue::Text(text) => text.clone(),
        CellValue::Number(number) => format_numeric(*number),
        CellValue::Date(date) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Write the cleaned table as CSV, preserving column order.
///
/// # Errors
///
/// Returns [`WriteError`] when the destination cannot be created or written.
pub fn write_cleaned(table: &Table, path: &Path) -> Result<(), WriteError> {
    let io_error = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(|error| match error.into_kind() {
        csv::ErrorKind::Io(source) => io_error(source),
        other => io_error(std::io::Error::other(format!("{other:?}"))),
    })?;
    let headers: Vec<&str> = table.columns.iter().map(|col| col.name.as_str()).collect();
    writer.write_record(&headers).map_err(to_io(path))?;
    for idx in 0..table.height() {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|col| render_cell(&col.values[idx]))
            .collect();
        writer.write_record(&record).map_err(to_io(path))?;
    }
    writer.flush().map_err(io_error)?;
    debug!(path = %path.display(), rows = table.height(), "wrote cleaned file");
    Ok(())
}

fn to_io(path: &Path) -> impl Fn(csv::Error) -> WriteError + '_ {
    move |error| {
        let source = match error.into_kind() {
            csv::ErrorKind::Io(source) => source,
            other => std::io::Error::other(format!("{other:?}")),
        };
        WriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
