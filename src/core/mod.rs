//! Core module - session records, trend prediction, and advice

mod advisor;
mod predictor;
mod progress;
mod types;

pub(crate) use advisor::Advice;
pub(crate) use progress::Progress;
pub(crate) use types::SessionRecord;
