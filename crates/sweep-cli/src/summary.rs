//! Console summary of a finished cleaning run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::pipeline::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Cleaned file: {}", result.cleaned_path.display());
    println!("Report: {}", result.report_path.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    let audit = &result.audit;
    for (label, count) in [
        ("Original rows", audit.original_rows),
        ("Original columns", audit.original_columns),
        ("Duplicates removed", audit.duplicates_removed),
        ("NaNs before", audit.nan_counts_before),
        ("NaNs after", audit.nan_counts_after),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
