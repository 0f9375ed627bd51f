use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::{CleanSummary, SampleSummary};

pub fn print_clean_summary(summary: &CleanSummary) {
    println!("Region: {}", summary.region);
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input rows"),
        header_cell("Year columns"),
        header_cell("Records written"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(summary.input_rows),
        Cell::new(summary.year_columns),
        Cell::new(summary.output_records).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_sample_summary(summary: &SampleSummary) {
    println!("Sample fixture: {}", summary.sample_path.display());
    println!("Expected fixture: {}", summary.expected_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Matching rows"),
        header_cell("Other rows"),
        header_cell("Expected records"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(summary.matching_rows),
        Cell::new(summary.non_matching_rows),
        Cell::new(summary.expected_records).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 0..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
