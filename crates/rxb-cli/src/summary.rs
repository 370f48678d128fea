use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use rxb_cli::commands::{CheckOutcome, DateRow, PatternReport};

pub fn print_pattern(report: &PatternReport) {
    println!("Pattern: {}", report.pattern);
    if report.flags.is_empty() {
        println!("Flags: (none)");
    } else {
        println!("Flags: {}", report.flags);
    }
    println!("Steps: {}", report.steps);
}

pub fn print_checks(outcomes: &[CheckOutcome]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Result"),
        header_cell("Matched"),
    ]);
    apply_table_style(&mut table);
    for outcome in outcomes {
        let result = if outcome.is_match() {
            Cell::new("match").fg(Color::Green)
        } else {
            Cell::new("no match").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&outcome.input),
            result,
            optional_cell(outcome.matched.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn print_dates(rows: &[DateRow]) {
    if rows.is_empty() {
        println!("No dates found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Raw"),
        header_cell("Normalized"),
        header_cell("Timestamp"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let timestamp = match &row.timestamp {
            Some(ts) => Cell::new(ts),
            None => Cell::new("Invalid Date").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&row.raw),
            Cell::new(&row.normalized),
            timestamp,
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
