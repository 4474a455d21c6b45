use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunSummary;

pub fn print_summary(result: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Records"),
        header_cell("Path"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for output in &result.outputs {
        table.add_row(vec![
            Cell::new(&output.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(output.records),
            Cell::new(output.path.display()),
        ]);
    }
    println!("{table}");
    for note in &result.notes {
        println!("note: {note}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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
