/// Standard date format used for default session dates: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// File name of the persisted session list
pub(crate) const DATA_FILE_NAME: &str = "study_data.json";

/// Directory name used under the platform data/config dirs
pub(crate) const APP_DIR: &str = "studyplan";

/// Environment variable holding a `tracing` filter directive
pub(crate) const LOG_ENV: &str = "STUDYPLAN_LOG";
