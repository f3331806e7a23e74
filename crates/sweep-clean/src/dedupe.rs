//! Exact-duplicate row removal.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use tracing::debug;

use sweep_model::{CellValue, Column, StageOutcome, Table};

/// Result of the dedupe stage.
#[derive(Debug)]
pub struct DedupeResult {
    pub table: Table,
    pub removed: usize,
    pub outcome: StageOutcome,
}

/// Remove rows that duplicate an earlier row across every column.
///
/// Two rows are duplicates when every cell compares equal; missing equals
/// missing. The first occurrence survives and survivor order is the original
/// order with removed rows deleted.
pub fn drop_duplicate_rows(table: &Table) -> DedupeResult {
    let height = table.height();
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(height);
    for idx in 0..height {
        let mut key = String::new();
        for column in &table.columns {
            encode_cell(&mut key, &column.values[idx]);
        }
        keep.push(seen.insert(key));
    }
    let removed = keep.iter().filter(|kept| !**kept).count();

    let table = if removed == 0 {
        table.clone()
    } else {
        let columns = table
            .columns
            .iter()
            .map(|column| {
                let values = column
                    .values
                    .iter()
                    .zip(&keep)
                    .filter(|(_, kept)| **kept)
                    .map(|(value, _)| value.clone())
                    .collect();
                Column::new(column.name.clone(), column.ty, values)
            })
            .collect();
        Table::new(columns)
    };
    debug!(removed, survivors = table.height(), "deduplicated rows");
    DedupeResult {
        table,
        removed,
        outcome: StageOutcome::note(format!("Removed {removed} duplicate rows.")),
    }
}

/// Append a collision-free encoding of one cell to a row key.
///
/// Each cell is type-tagged and text is length-delimited, so adjacent cells
/// cannot merge into the same key (`["ab","c"]` vs `["a","bc"]`).
fn encode_cell(key: &mut String, cell: &CellValue) {
    match cell {
        CellValue::Missing => key.push_str("m;"),
        CellValue::Number(number) => {
            // +0.0 and -0.0 compare equal; fold them before taking bits.
            let number = if *number == 0.0 { 0.0 } else { *number };
            let _ = write!(key, "n{:x};", number.to_bits());
        }
        CellValue::Text(text) => {
            let _ = write!(key, "t{}:{text};", text.len());
        }
        CellValue::Date(date) => {
            let _ = write!(key, "d{date};");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sweep_model::ColumnType;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn two_column_table(rows: &[(Option<i32>, &str)]) -> Table {
        let numbers = rows
            .iter()
            .map(|(n, _)| match n {
                Some(n) => CellValue::Number(f64::from(*n)),
                None => CellValue::Missing,
            })
            .collect();
        let texts = rows.iter().map(|(_, t)| text(t)).collect();
        Table::new(vec![
            Column::new("n", ColumnType::Numeric, numbers),
            Column::new("t", ColumnType::Text, texts),
        ])
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let table = two_column_table(&[
            (Some(1), "a"),
            (Some(2), "b"),
            (Some(1), "a"),
            (Some(3), "c"),
        ]);
        let result = drop_duplicate_rows(&table);
        assert_eq!(result.removed, 1);
        assert_eq!(result.table.height(), 3);
        assert_eq!(
            result.table.column("t").unwrap().values,
            vec![text("a"), text("b"), text("c")]
        );
        assert_eq!(result.outcome.notes, vec!["Removed 1 duplicate rows."]);
    }

    #[test]
    fn missing_equals_missing() {
        let table = two_column_table(&[(None, "x"), (None, "x")]);
        let result = drop_duplicate_rows(&table);
        assert_eq!(result.removed, 1);
        assert_eq!(result.table.height(), 1);
    }

    #[test]
    fn missing_differs_from_present() {
        let table = two_column_table(&[(None, "x"), (Some(0), "x")]);
        let result = drop_duplicate_rows(&table);
        assert_eq!(result.removed, 0);
        assert_eq!(result.table.height(), 2);
    }

    #[test]
    fn adjacent_text_cells_do_not_collide() {
        let table = Table::new(vec![
            Column::new("a", ColumnType::Text, vec![text("ab"), text("a")]),
            Column::new("b", ColumnType::Text, vec![text("c"), text("bc")]),
        ]);
        let result = drop_duplicate_rows(&table);
        assert_eq!(result.removed, 0);
    }

    #[test]
    fn zero_removed_still_notes() {
        let table = two_column_table(&[(Some(1), "a")]);
        let result = drop_duplicate_rows(&table);
        assert_eq!(result.outcome.notes, vec!["Removed 0 duplicate rows."]);
    }

    proptest! {
        #[test]
        fn dedupe_shrinks_and_leaves_no_duplicates(
            rows in prop::collection::vec((prop::option::of(0..3i32), 0..3u8), 0..24)
        ) {
            let rows: Vec<(Option<i32>, String)> = rows
                .into_iter()
                .map(|(n, t)| (n, format!("t{t}")))
                .collect();
            let borrowed: Vec<(Option<i32>, &str)> =
                rows.iter().map(|(n, t)| (*n, t.as_str())).collect();
            let table = two_column_table(&borrowed);

            let result = drop_duplicate_rows(&table);
            prop_assert!(result.table.height() <= table.height());
            prop_assert_eq!(result.table.height() + result.removed, table.height());

            // No two surviving rows compare fully equal.
            for i in 0..result.table.height() {
                for j in (i + 1)..result.table.height() {
                    prop_assert_ne!(result.table.row(i), result.table.row(j));
                }
            }

            // Idempotent: a second pass removes nothing.
            let again = drop_duplicate_rows(&result.table);
            prop_assert_eq!(again.removed, 0);
        }
    }
}
