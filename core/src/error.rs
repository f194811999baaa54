// core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Alle feil eksport-pipelinen kan gi.
///
/// Myke problemer som ukjent aktivitetskode eller manglende METs er aldri
/// feil; de logges og løses med defaults.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed export document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("unrecognised timestamp '{value}'")]
    Timestamp { value: String },

    #[error("attribute '{field}' is not numeric: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn number(field: &'static str, value: &str) -> Self {
        ExportError::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
