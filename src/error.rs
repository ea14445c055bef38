use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid hours \"{input}\" (expected a non-negative number)")]
    InvalidHours { input: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize sessions: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_hours() {
        let e = AppError::InvalidHours {
            input: "-2".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid hours "-2" (expected a non-negative number)"#
        );
    }

    #[test]
    fn app_error_display_write() {
        let e = AppError::Write {
            path: PathBuf::from("/nope/study_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Failed to write /nope/study_data.json: denied");
    }

    #[test]
    fn app_error_write_keeps_io_source() {
        use std::error::Error as _;

        let e = AppError::Write {
            path: PathBuf::from("x.json"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(e.source().map(|s| s.to_string()), Some("disk full".to_string()));
    }
}
