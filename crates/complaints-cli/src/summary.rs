use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use complaints_report::ColumnSummary;

use crate::commands::{EdaOutcome, PreprocessOutcome};

pub fn print_preprocess_summary(outcome: &PreprocessOutcome) {
    println!("Output: {}", outcome.output_path.display());
    println!("Shape: {} rows x {} columns", outcome.rows, outcome.columns);
}

pub fn print_eda_summary(outcome: &EdaOutcome) {
    println!("{}", column_summary_table(&outcome.report.columns));
    if let Some(span) = &outcome.report.missing_span {
        println!("Missing values window: {span}");
    }
    for path in &outcome.written {
        println!("Wrote {}", path.display());
    }
}

/// Renders the per-column profile as a table.
pub fn column_summary_table(rows: &[ColumnSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Valid"),
        header_cell("Unique"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.column),
            Cell::new(row.valid_count),
            Cell::new(row.unique_count),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
