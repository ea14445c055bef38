mod format;
mod json;
mod statusline;
mod table;

pub(crate) use json::{output_prediction_json, output_progress_json, output_record_json};
pub(crate) use statusline::format_prediction_line;
pub(crate) use table::{ProgressTableOptions, render_progress};
