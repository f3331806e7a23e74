use std::fs::File;
use std::path::Path;

use tracing::debug;

use sweep_model::{CellValue, Column, ColumnType, LoadError, Table};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse a string as a finite number, tolerating surrounding whitespace.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Read a CSV file into a typed [`Table`].
///
/// Empty fields become [`CellValue::Missing`]; everything else is loaded as
/// text and then type-inferred per column: a column whose non-missing values
/// all parse as numbers becomes numeric. Text is kept verbatim (trimming and
/// casefolding belong to the normalize stage). Date detection also happens
/// later, in the normalize stage.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file is missing or unreadable and
/// [`LoadError::Malformed`] for ragged records or a missing header row.
pub fn read_table(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| malformed(path, error))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() || headers.iter().all(|header| header.is_empty()) {
        return Err(LoadError::Malformed {
            path: path.to_path_buf(),
            message: "missing header row".to_string(),
        });
    }

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|error| malformed(path, error))?;
        for (idx, raw) in record.iter().enumerate() {
            let cell = if raw.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(raw.to_string())
            };
            cells[idx].push(cell);
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| infer_column(name, values))
        .collect::<Vec<_>>();
    let table = Table::new(columns);
    debug!(
        rows = table.height(),
        columns = table.width(),
        "loaded table"
    );
    Ok(table)
}

/// Promote a raw text column to numeric when every present value parses.
///
/// An all-missing column is numeric too: with no text to contradict it, the
/// column carries no values at all, and the imputer's all-missing handling
/// (leave alone, note it) is the behavior we want for it.
fn infer_column(name: String, values: Vec<CellValue>) -> Column {
    let mut parsed = Vec::with_capacity(values.len());
    for cell in &values {
        match cell {
            CellValue::Missing => parsed.push(CellValue::Missing),
            CellValue::Text(text) => match parse_f64(text) {
                Some(number) => parsed.push(CellValue::Number(number)),
                None => return Column::new(name, ColumnType::Text, values),
            },
            other => parsed.push(other.clone()),
        }
    }
    Column::new(name, ColumnType::Numeric, parsed)
}

fn malformed(path: &Path, error: csv::Error) -> LoadError {
    if let csv::ErrorKind::Io(source) = error.into_kind() {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    } else {
        LoadError::Malformed {
            path: path.to_path_buf(),
            message: "invalid csv structure".to_string(),
        }
    }
}
