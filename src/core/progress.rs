//! Read-only view over the session list: totals, trend, prediction, advice

use crate::core::advisor::Advice;
use crate::core::predictor::{Trend, fit_trend, predict_next};
use crate::core::types::{SessionRecord, Summary};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Progress {
    pub(crate) summary: Summary,
    pub(crate) trend: Option<Trend>,
    pub(crate) prediction: Option<f64>,
    pub(crate) advice: Advice,
}

impl Progress {
    pub(crate) fn from_records(records: &[SessionRecord]) -> Self {
        let prediction = predict_next(records);
        Progress {
            summary: Summary::from_records(records),
            trend: fit_trend(records),
            prediction,
            advice: Advice::for_prediction(prediction),
        }
    }
}
