use std::path::PathBuf;

use thiserror::Error;

use crate::data::traces::SeriesKind;

/// Errors raised while recording samples, exporting or loading configuration.
#[derive(Debug, Error)]
pub enum GraphLogError {
    /// A series received a sample of the other kind than the one it was created with.
    #[error("series '{name}' holds {expected} samples, got {found}")]
    TypeMismatch {
        name: String,
        expected: SeriesKind,
        found: SeriesKind,
    },

    #[error("series '{name}' rejected a non-finite value at tick {tick}")]
    NonFiniteValue { name: String, tick: i64 },

    /// The export destination could not be opened or written.
    #[error("could not write log to '{}': {source}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = GraphLogError> = std::result::Result<T, E>;
