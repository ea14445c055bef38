use comfy_table::{Cell, Color};
use std::fmt::Write as _;

use crate::cli::SortOrder;
use crate::core::{Progress, SessionRecord};
use crate::output::format::{
    advice_ansi, colorize, create_styled_table, format_hours, header_cell, right_cell,
    styled_cell,
};

pub(crate) const NO_DATA_MESSAGE: &str = "No study data available. Please add study sessions.";
pub(crate) const NO_PREDICTION_MESSAGE: &str = "Not enough data to predict study hours.";

#[derive(Debug, Clone, Copy)]
pub(crate) struct ProgressTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
}

/// Row order for display; numbering always follows entry order
fn display_rows(records: &[SessionRecord], order: SortOrder) -> Vec<(usize, &SessionRecord)> {
    let mut rows: Vec<_> = records.iter().enumerate().collect();
    if order == SortOrder::Desc {
        rows.reverse();
    }
    rows
}

fn build_table(records: &[SessionRecord], progress: &Progress, opts: ProgressTableOptions) -> String {
    let c = opts.use_color;
    let cyan = if c { Some(Color::Cyan) } else { None };

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", c),
        header_cell("Date", c),
        header_cell("Hours", c),
    ]);
    for (i, record) in display_rows(records, opts.order) {
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None, false),
            Cell::new(&record.date),
            right_cell(&format_hours(record.hours), None, false),
        ]);
    }
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        Cell::new(""),
        right_cell(&format_hours(progress.summary.total_hours), cyan, true),
    ]);
    table.to_string()
}

/// Render the session table, summary, prediction and advice as display text.
pub(crate) fn render_progress(
    records: &[SessionRecord],
    progress: &Progress,
    opts: ProgressTableOptions,
) -> String {
    let advice_line = colorize(
        progress.advice.message(),
        advice_ansi(progress.advice),
        opts.use_color,
    );

    let mut out = String::new();
    if records.is_empty() {
        let _ = writeln!(out, "{NO_DATA_MESSAGE}");
        let _ = writeln!(out, "\n{advice_line}");
        return out;
    }

    let _ = writeln!(out, "\n  Your Study Sessions\n");
    let _ = writeln!(out, "{}", build_table(records, progress, opts));

    let mut stats = format!("{} sessions", progress.summary.sessions);
    if let Some(avg) = progress.summary.average_hours {
        let _ = write!(stats, " | avg {}h", format_hours(avg));
    }
    let _ = writeln!(out, "\n  {stats}");

    match progress.prediction {
        Some(p) => {
            let _ = writeln!(
                out,
                "  Predicted study hours for next session: {} hours",
                format_hours(p)
            );
        }
        None => {
            let _ = writeln!(out, "  {NO_PREDICTION_MESSAGE}");
        }
    }
    let _ = writeln!(out, "\n  {advice_line}\n");
    out
}
