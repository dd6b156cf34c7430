//! Terminal summary rendering for validation runs.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ValidationRun;

/// Upper bound on individually listed invalid records.
const MAX_LISTED_INVALID: usize = 20;

pub fn print_summary(run: &ValidationRun) {
    println!("Records: {}", run.records_path.display());
    if let Some(path) = &run.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Rules"),
        header_cell("Valid"),
        header_cell("Invalid"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(run.record_count),
        Cell::new(run.rule_count),
        valid_cell(run.result.valid_count()),
        invalid_cell(run.result.invalid_count()),
    ]);
    println!("{table}");

    let invalid = run.result.invalid_indices();
    if invalid.is_empty() {
        return;
    }
    let listed: Vec<String> = invalid
        .iter()
        .take(MAX_LISTED_INVALID)
        .map(|index| index.to_string())
        .collect();
    let mut line = format!("Invalid records: {}", listed.join(", "));
    if invalid.len() > MAX_LISTED_INVALID {
        line.push_str(&format!(" (+{} more)", invalid.len() - MAX_LISTED_INVALID));
    }
    println!("{line}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn valid_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn invalid_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
