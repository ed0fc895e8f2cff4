use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    /// Bad input from the caller; nothing was changed.
    #[error("{0}")]
    Validation(String),
    /// No note in the required state; nothing was changed.
    #[error("{0}")]
    NotFound(&'static str),
    /// The in-memory change was applied but the snapshot write failed.
    #[error("Failed to save journal to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize journal: {0}")]
    Serialization(#[from] serde_json::Error),
}
