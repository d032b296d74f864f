//! Persistence error types.

use thiserror::Error;

/// The output document could not be written. Fatal to the run.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Serializing the document failed.
    #[error("Failed to serialize project document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the document failed.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
