//! Session persistence
//!
//! `Store` is the persistence seam; `SessionLog` owns the in-memory session
//! list for one run of a command and flushes it through the store after every
//! append.

mod json;

pub(crate) use json::JsonFileStore;

use crate::core::SessionRecord;
use crate::error::AppError;

/// Durable home of the session list
pub(crate) trait Store {
    /// Read persisted sessions. Missing or unreadable state yields an empty list.
    fn load(&self) -> Vec<SessionRecord>;

    /// Replace persisted state with `records`.
    fn save(&self, records: &[SessionRecord]) -> Result<(), AppError>;
}

/// Session list loaded from a store, in insertion order
pub(crate) struct SessionLog<S: Store> {
    store: S,
    records: Vec<SessionRecord>,
}

impl<S: Store> SessionLog<S> {
    pub(crate) fn open(store: S) -> Self {
        let records = store.load();
        tracing::debug!(sessions = records.len(), "loaded session log");
        SessionLog { store, records }
    }

    pub(crate) fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    /// Append a session and persist the whole list.
    ///
    /// On a failed save the record is dropped again so memory matches disk.
    pub(crate) fn append(
        &mut self,
        date: impl Into<String>,
        hours: f64,
    ) -> Result<&SessionRecord, AppError> {
        let record = SessionRecord::new(date, hours)?;
        self.records.push(record);
        if let Err(e) = self.store.save(&self.records) {
            self.records.pop();
            return Err(e);
        }
        tracing::debug!(sessions = self.records.len(), "appended session");
        Ok(&self.records[self.records.len() - 1])
    }
}
