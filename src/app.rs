use crate::cli::{Cli, Commands};
use crate::core::Progress;
use crate::error::AppError;
use crate::output::{
    ProgressTableOptions, format_prediction_line, output_prediction_json, output_progress_json,
    output_record_json, render_progress,
};
use crate::store::{JsonFileStore, SessionLog};
use crate::utils::today;

fn handle_add(
    log: &mut SessionLog<JsonFileStore>,
    hours: f64,
    date: Option<String>,
    cli: &Cli,
) -> Result<(), AppError> {
    let date = date.unwrap_or_else(today);
    let record = log.append(date, hours)?;
    if cli.json {
        println!("{}", output_record_json(record));
    } else {
        println!(
            "Session saved successfully! ({}: {} hours)",
            record.date, record.hours
        );
    }
    Ok(())
}

fn handle_show(log: &SessionLog<JsonFileStore>, cli: &Cli) {
    let records = log.records();
    let progress = Progress::from_records(records);
    if cli.json {
        println!("{}", output_progress_json(records, &progress));
    } else {
        print!(
            "{}",
            render_progress(
                records,
                &progress,
                ProgressTableOptions {
                    order: cli.order,
                    use_color: cli.use_color(),
                },
            )
        );
    }
}

fn handle_predict(log: &SessionLog<JsonFileStore>, cli: &Cli) {
    let progress = Progress::from_records(log.records());
    if cli.json {
        println!("{}", output_prediction_json(&progress));
    } else {
        println!("{}", format_prediction_line(&progress, cli.use_color()));
    }
}

/// Run the parsed command against the configured session file
pub(crate) fn run(mut cli: Cli) -> Result<(), AppError> {
    let path = cli
        .data_file
        .clone()
        .unwrap_or_else(JsonFileStore::default_path);
    let store = JsonFileStore::new(path);
    tracing::debug!(path = %store.path().display(), "using session data file");
    let mut log = SessionLog::open(store);

    match cli.command.take() {
        Some(Commands::Add { hours, date }) => handle_add(&mut log, hours, date, &cli),
        Some(Commands::Predict) => {
            handle_predict(&log, &cli);
            Ok(())
        }
        Some(Commands::Show) | None => {
            handle_show(&log, &cli);
            Ok(())
        }
    }
}
