use crate::model::RankedAverage;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, Table};

/// Render the ranking as a grid table with a 1-based index column.
///
/// An empty ranking still renders the header row.
pub fn render_table(ranked: &[RankedAverage]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["", "country", "gdp"]);

    for (i, row) in ranked.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            row.country.clone(),
            format!("{:.2}", row.average),
        ]);
    }

    for idx in [0, 2] {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}
