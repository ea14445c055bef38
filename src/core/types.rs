//! Core data types for study sessions
//!
//! `SessionRecord` is the only persisted entity; everything else here is
//! derived from a slice of records at display time.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One dated study-hours observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SessionRecord {
    /// Free-form date label, never validated as a calendar date
    pub(crate) date: String,
    pub(crate) hours: f64,
}

impl SessionRecord {
    /// Build a record, enforcing the `hours >= 0` invariant.
    pub(crate) fn new(date: impl Into<String>, hours: f64) -> Result<Self, AppError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::InvalidHours {
                input: hours.to_string(),
            });
        }
        Ok(SessionRecord {
            date: date.into(),
            hours,
        })
    }
}

/// Totals over the whole session list
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct Summary {
    pub(crate) sessions: usize,
    pub(crate) total_hours: f64,
    /// `None` when there are no sessions
    pub(crate) average_hours: Option<f64>,
}

impl Summary {
    pub(crate) fn from_records(records: &[SessionRecord]) -> Self {
        let total_hours: f64 = records.iter().map(|r| r.hours).sum();
        let average_hours = if records.is_empty() {
            None
        } else {
            Some(total_hours / records.len() as f64)
        };
        Summary {
            sessions: records.len(),
            total_hours,
            average_hours,
        }
    }
}
