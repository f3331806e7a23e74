//! Missing-value imputation.

use tracing::debug;

use sweep_model::{CellValue, Column, ColumnType, StageOutcome, Table};

/// Result of the impute stage.
#[derive(Debug)]
pub struct ImputeResult {
    pub table: Table,
    /// Missing cells remaining after imputation. Nonzero only when an
    /// all-missing numeric column had no median to fill with.
    pub missing_after: usize,
    pub outcome: StageOutcome,
}

/// Fill missing cells column by column.
///
/// Numeric columns get the median of their present values; when every value
/// is missing the column is left alone and noted. Every other column gets an
/// empty-text placeholder.
pub fn fill_missing(table: &Table) -> ImputeResult {
    let mut outcome = StageOutcome::default();
    let columns = table
        .columns
        .iter()
        .map(|column| fill_column(column, &mut outcome))
        .collect();
    let table = Table::new(columns);
    let missing_after = table.missing_count();
    outcome.push(format!(
        "Filled NaNs. Total NaNs after cleaning: {missing_after}."
    ));
    debug!(missing_after, "imputed missing cells");
    ImputeResult {
        table,
        missing_after,
        outcome,
    }
}

fn fill_column(column: &Column, outcome: &mut StageOutcome) -> Column {
    if column.missing_count() == 0 {
        return column.clone();
    }
    let fill = match column.ty {
        ColumnType::Numeric => match median(&column.values) {
            Some(median) => CellValue::Number(median),
            None => {
                outcome.push(format!(
                    "Column '{}' left unfilled: no median available.",
                    column.name
                ));
                return column.clone();
            }
        },
        ColumnType::Text | ColumnType::Date => CellValue::Text(String::new()),
    };
    let values = column
        .values
        .iter()
        .map(|cell| {
            if cell.is_missing() {
                fill.clone()
            } else {
                cell.clone()
            }
        })
        .collect();
    Column::new(column.name.clone(), column.ty, values)
}

/// Median of the present values; `None` when there are none.
///
/// Even counts take the mean of the two middle values, with no rounding
/// beyond source precision.
fn median(values: &[CellValue]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().filter_map(CellValue::as_number).collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = present.len() / 2;
    if present.len() % 2 == 1 {
        Some(present[mid])
    } else {
        Some((present[mid - 1] + present[mid]) / 2.0)
    }
}
