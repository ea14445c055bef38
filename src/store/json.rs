use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::consts::{APP_DIR, DATA_FILE_NAME};
use crate::core::SessionRecord;
use crate::error::AppError;
use crate::store::Store;

/// Sessions stored as a pretty-printed JSON array in a single file
#[derive(Debug, Clone)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// `<data dir>/studyplan/study_data.json`, or `./study_data.json` when the
    /// platform has no data dir.
    pub(crate) fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join(APP_DIR).join(DATA_FILE_NAME),
            None => PathBuf::from(DATA_FILE_NAME),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DATA_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> AppError {
        AppError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Vec<SessionRecord> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no session data");
                return Vec::new();
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring malformed session data"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[SessionRecord]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }
        let json = serde_json::to_string_pretty(records)?;

        // Write beside the target, then rename over it
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(e));
        }
        tracing::debug!(path = %self.path.display(), sessions = records.len(), "saved sessions");
        Ok(())
    }
}
