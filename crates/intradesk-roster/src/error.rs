//! Error types for roster loading.

use intradesk_core::error::IntradeskError;

/// Errors raised while reading the roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to open roster {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed roster {path}: {source}")]
    Csv { path: String, source: csv::Error },
    #[error("roster {path} is missing required columns: {}", .missing.join(", "))]
    MissingColumns { path: String, missing: Vec<String> },
}

impl From<RosterError> for IntradeskError {
    fn from(err: RosterError) -> Self {
        IntradeskError::Roster(err.to_string())
    }
}
