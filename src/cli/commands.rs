//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Record a study session
    Add {
        /// Hours studied (non-negative)
        #[arg(value_parser = parse_hours, allow_negative_numbers = true)]
        hours: f64,

        /// Session date, free-form (defaults to today, YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show sessions, prediction and advice (default)
    Show,
    /// Output a single line with the next-session prediction
    Predict,
}

/// Parse an hours argument, rejecting non-numeric and negative values
pub(crate) fn parse_hours(s: &str) -> Result<f64, String> {
    let hours: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("\"{s}\" is not a number"))?;
    if !hours.is_finite() {
        return Err(format!("\"{s}\" is not a finite number"));
    }
    if hours < 0.0 {
        return Err("hours can't be negative".to_string());
    }
    Ok(hours)
}
