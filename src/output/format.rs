use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::Advice;

/// Hours with two decimals: "2.50"
pub(super) fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

/// Prediction for display, "n/a" when there is none
pub(super) fn format_prediction(prediction: Option<f64>) -> String {
    match prediction {
        Some(p) => format!("{}h", format_hours(p)),
        None => "n/a".to_string(),
    }
}

/// ANSI escape for wrapping a whole line outside a table
pub(super) fn advice_ansi(advice: Advice) -> &'static str {
    match advice {
        Advice::NotEnoughData => "\x1b[90m",
        Advice::StartSmall => "\x1b[33m",
        Advice::GoodStart => "\x1b[36m",
        Advice::GreatJob | Advice::Excellent => "\x1b[32m",
    }
}

pub(super) fn colorize(text: &str, ansi: &str, use_color: bool) -> String {
    if use_color {
        format!("{ansi}{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}
