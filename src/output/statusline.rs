use crate::core::Progress;
use crate::output::format::{advice_ansi, colorize, format_prediction};

/// Single line for the `predict` command
/// Format: "Next session: 6.00h | Excellent work! ..."
pub(crate) fn format_prediction_line(progress: &Progress, use_color: bool) -> String {
    let message = colorize(
        progress.advice.message(),
        advice_ansi(progress.advice),
        use_color,
    );
    format!(
        "Next session: {} | {}",
        format_prediction(progress.prediction),
        message
    )
}
