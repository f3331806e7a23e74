//! Text normalization and best-effort date promotion.

use tracing::debug;

use sweep_model::{CellValue, Column, ColumnType, StageOutcome, Table};

use crate::dates::parse_date;

/// Result of the normalize stage.
#[derive(Debug)]
pub struct NormalizeResult {
    pub table: Table,
    pub outcome: StageOutcome,
}

/// Per-column decision of the date promotion pass.
#[derive(Debug, Clone, PartialEq)]
pub enum DatePromotion {
    /// Every candidate value parsed and at least one differs from its source
    /// text; these are the replacement cells.
    Promoted(Vec<CellValue>),
    /// The column stays text, with the reason it was not promoted.
    KeptAsText(KeepReason),
}

/// Why a column was not promoted to dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepReason {
    /// At least one value failed to parse; promotion is all-or-nothing.
    UnparsableValue,
    /// Every value parsed but already round-trips to the same text.
    AlreadyCanonical,
    /// Nothing to parse (not a text column, or only empty placeholders).
    NoCandidates,
}

/// Normalize text columns, then try to promote each one to dates.
///
/// Pass 1 trims and lowercases every text cell of every text column,
/// uniformly, so the date pass always sees trimmed lowercase input. Pass 2
/// applies [`promote_dates`] per column; promotions are noted, refusals are
/// silent.
pub fn normalize(table: &Table) -> NormalizeResult {
    let mut outcome = StageOutcome::default();
    let mut columns: Vec<Column> = table
        .columns
        .iter()
        .map(|column| {
            if column.ty == ColumnType::Text {
                trim_casefold(column)
            } else {
                column.clone()
            }
        })
        .collect();
    let text_columns = columns
        .iter()
        .filter(|column| column.ty == ColumnType::Text)
        .count();
    outcome.push(format!(
        "Standardized text columns: stripped whitespace and lowered case for {text_columns} columns."
    ));

    for column in &mut columns {
        if let DatePromotion::Promoted(values) = promote_dates(column) {
            column.values = values;
            column.ty = ColumnType::Date;
            outcome.push(format!(
                "Converted column '{}' to date where possible.",
                column.name
            ));
            debug!(column = %column.name, "promoted text column to dates");
        }
    }

    NormalizeResult {
        table: Table::new(columns),
        outcome,
    }
}

fn trim_casefold(column: &Column) -> Column {
    let values = column
        .values
        .iter()
        .map(|cell| match cell {
            CellValue::Text(text) => CellValue::Text(text.trim().to_lowercase()),
            other => other.clone(),
        })
        .collect();
    Column::new(column.name.clone(), column.ty, values)
}

/// Decide whether a text column can be promoted to dates.
///
/// All-or-nothing: every non-empty text value must parse, or the column is
/// kept as text. Empty-string cells (the missing placeholder) are left aside
/// and survive verbatim in a promoted column. A column whose values all
/// round-trip to identical text is left alone too; re-typing it would change
/// nothing a reader could see.
pub fn promote_dates(column: &Column) -> DatePromotion {
    if column.ty != ColumnType::Text {
        return DatePromotion::KeptAsText(KeepReason::NoCandidates);
    }
    let mut replacement = Vec::with_capacity(column.values.len());
    let mut candidates = 0usize;
    let mut changed = false;
    for cell in &column.values {
        match cell {
            CellValue::Text(text) if !text.is_empty() => match parse_date(text) {
                Some(date) => {
                    candidates += 1;
                    if date.format("%Y-%m-%d").to_string() != *text {
                        changed = true;
                    }
                    replacement.push(CellValue::Date(date));
                }
                None => return DatePromotion::KeptAsText(KeepReason::UnparsableValue),
            },
            other => replacement.push(other.clone()),
        }
    }
    if candidates == 0 {
        DatePromotion::KeptAsText(KeepReason::NoCandidates)
    } else if !changed {
        DatePromotion::KeptAsText(KeepReason::AlreadyCanonical)
    } else {
        DatePromotion::Promoted(replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn text_column(name: &str, values: &[&str]) -> Column {
        Column::new(
            name,
            ColumnType::Text,
            values.iter().map(|v| text(v)).collect(),
        )
    }

    #[test]
    fn trims_and_lowercases_every_text_cell() {
        let table = Table::new(vec![text_column("city", &["  Seattle ", "NEW YORK"])]);
        let result = normalize(&table);
        assert_eq!(
            result.table.column("city").unwrap().values,
            vec![text("seattle"), text("new york")]
        );
        assert!(
            result.outcome.notes[0]
                .contains("stripped whitespace and lowered case for 1 columns")
        );
    }

    #[test]
    fn trim_casefold_is_idempotent() {
        let table = Table::new(vec![text_column("c", &["  MiXeD  Case "])]);
        let once = normalize(&table);
        let twice = normalize(&once.table);
        assert_eq!(
            once.table.column("c").unwrap().values,
            twice.table.column("c").unwrap().values
        );
    }

    #[test]
    fn promotes_uniform_date_column_with_note() {
        let table = Table::new(vec![text_column("when", &["15/01/2024", "16/01/2024"])]);
        let result = normalize(&table);
        let when = result.table.column("when").unwrap();
        assert_eq!(when.ty, ColumnType::Date);
        assert_eq!(
            when.values[0],
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert!(
            result
                .outcome
                .notes
                .iter()
                .any(|note| note == "Converted column 'when' to date where possible.")
        );
    }

    #[test]
    fn one_unparsable_value_blocks_promotion() {
        let column = text_column("when", &["2024-01-01", "2024-02-01", "not-a-date"]);
        assert_eq!(
            promote_dates(&column),
            DatePromotion::KeptAsText(KeepReason::UnparsableValue)
        );
        // And the stage emits no note for it.
        let result = normalize(&Table::new(vec![column]));
        assert_eq!(result.table.column("when").unwrap().ty, ColumnType::Text);
        assert!(!result.outcome.notes.iter().any(|n| n.contains("Converted")));
    }

    #[test]
    fn already_canonical_column_stays_text() {
        let column = text_column("when", &["2024-01-01", "2024-02-01"]);
        assert_eq!(
            promote_dates(&column),
            DatePromotion::KeptAsText(KeepReason::AlreadyCanonical)
        );
    }

    #[test]
    fn empty_placeholders_survive_promotion() {
        let column = text_column("when", &["15/01/2024", ""]);
        let DatePromotion::Promoted(values) = promote_dates(&column) else {
            panic!("expected promotion");
        };
        assert_eq!(values[1], text(""));
        assert!(matches!(values[0], CellValue::Date(_)));
    }

    #[test]
    fn all_empty_column_has_no_candidates() {
        let column = text_column("when", &["", ""]);
        assert_eq!(
            promote_dates(&column),
            DatePromotion::KeptAsText(KeepReason::NoCandidates)
        );
    }

    #[test]
    fn numeric_columns_are_untouched() {
        let column = Column::new(
            "n",
            ColumnType::Numeric,
            vec![CellValue::Number(1.0), CellValue::Missing],
        );
        assert_eq!(
            promote_dates(&column),
            DatePromotion::KeptAsText(KeepReason::NoCandidates)
        );
        let result = normalize(&Table::new(vec![column.clone()]));
        assert_eq!(result.table.column("n").unwrap().values, column.values);
    }

    #[test]
    fn date_parsing_runs_on_normalized_text() {
        // Mixed case and padding before normalization; promotion still works.
        let table = Table::new(vec![text_column("when", &["  15 Jan 2024 ", "16 FEB 2024"])]);
        let result = normalize(&table);
        assert_eq!(result.table.column("when").unwrap().ty, ColumnType::Date);
    }
}
