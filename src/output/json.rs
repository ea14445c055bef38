use crate::core::{Advice, Progress, SessionRecord};

fn advice_json(advice: Advice) -> serde_json::Value {
    serde_json::json!({
        "category": advice.category(),
        "message": advice.message(),
    })
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to serialize JSON output");
        "{}".to_string()
    })
}

/// Full progress report: sessions in entry order plus derived values
pub(crate) fn output_progress_json(records: &[SessionRecord], progress: &Progress) -> String {
    let sessions: Vec<serde_json::Value> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            serde_json::json!({
                "index": i,
                "date": r.date,
                "hours": r.hours,
            })
        })
        .collect();

    let output = serde_json::json!({
        "sessions": sessions,
        "summary": progress.summary,
        "trend": progress.trend,
        "prediction": progress.prediction,
        "advice": advice_json(progress.advice),
    });
    to_pretty(&output)
}

pub(crate) fn output_prediction_json(progress: &Progress) -> String {
    let output = serde_json::json!({
        "prediction": progress.prediction,
        "advice": advice_json(progress.advice),
    });
    to_pretty(&output)
}

pub(crate) fn output_record_json(record: &SessionRecord) -> String {
    to_pretty(&serde_json::json!(record))
}
