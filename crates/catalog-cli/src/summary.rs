use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde_json::Value;

use catalog_model::ValidationIssue;
use catalog_report::DefectReport;

/// Build the defect table: one row per issue, grouped by product.
pub fn defect_table(report: &DefectReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_defect_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for defect in &report.defects {
        for (position, issue) in defect.issues.iter().enumerate() {
            // Product columns are only filled on the first row of each group.
            let (index, id, title) = if position == 0 {
                (
                    Cell::new(defect.index),
                    value_cell(&defect.id),
                    value_cell(&defect.title),
                )
            } else {
                (dim_cell(""), dim_cell(""), dim_cell(""))
            };
            table.add_row(vec![
                index,
                id,
                title,
                field_cell(issue),
                Cell::new(issue.message()),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} of {} products defective",
            report.defective_count, report.total_products
        ))
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(report.issue_count()),
    ]);
    table
}

pub fn print_summary(report: &DefectReport) {
    if !report.has_defects() {
        println!(
            "No defective products detected ({} scanned).",
            report.total_products
        );
        return;
    }
    println!("{}", defect_table(report));
}

fn apply_defect_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::LowerBoundary(Width::Fixed(13)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
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

fn field_cell(issue: &ValidationIssue) -> Cell {
    Cell::new(issue.field_path())
        .fg(Color::Red)
        .add_attribute(Attribute::Bold)
}

/// Strings are shown bare, everything else as compact JSON.
fn value_cell(value: &Value) -> Cell {
    match value {
        Value::Null => dim_cell("-"),
        Value::String(text) if text.trim().is_empty() => dim_cell(format!("{text:?}")),
        Value::String(text) => Cell::new(text),
        other => Cell::new(other.to_string()),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(format!("{count} issues"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("0 issues")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
