use chrono::NaiveDate;

/// A single typed cell.
///
/// `Missing` is a distinguished marker, not an empty string and not zero.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Inferred storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnType {
    Numeric,
    Text,
    Date,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            ty,
            values,
        }
    }

    /// Number of `Missing` cells in this column.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|cell| cell.is_missing()).count()
    }
}

/// An in-memory table: ordered named columns aligned by row index.
///
/// Invariant: every column holds the same number of values. Constructors and
/// mutators uphold it; dedup compacts all columns with one mask.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns
                .windows(2)
                .all(|pair| pair[0].values.len() == pair[1].values.len()),
            "columns must share one height"
        );
        Self { columns }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |col| col.values.len())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| col.name == name)
    }

    /// Cells of row `idx`, in column order.
    pub fn row(&self, idx: usize) -> Vec<&CellValue> {
        self.columns.iter().map(|col| &col.values[idx]).collect()
    }

    /// Total `Missing` cells across the table.
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn missing_is_distinct_from_empty_text() {
        assert_ne!(CellValue::Missing, text(""));
        assert_ne!(CellValue::Missing, CellValue::Number(0.0));
        assert!(CellValue::Missing.is_missing());
        assert!(!text("").is_missing());
    }

    #[test]
    fn table_counts_missing_across_columns() {
        let table = Table::new(vec![
            Column::new(
                "a",
                ColumnType::Numeric,
                vec![CellValue::Number(1.0), CellValue::Missing],
            ),
            Column::new("b", ColumnType::Text, vec![text("x"), CellValue::Missing]),
        ]);
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.missing_count(), 2);
    }

    #[test]
    fn cell_value_serde_is_tagged() {
        let json = serde_json::to_string(&CellValue::Missing).unwrap();
        assert_eq!(json, r#"{"kind":"Missing"}"#);
        let json = serde_json::to_string(&text("ok")).unwrap();
        assert_eq!(json, r#"{"kind":"Text","value":"ok"}"#);
    }
}
