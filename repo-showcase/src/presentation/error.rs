//! Presentation error types.

use thiserror::Error;

/// The local document cannot be used. Triggers the client fallback.
#[derive(Debug, Error)]
pub enum LocalDataUnavailable {
    /// No document at the path.
    #[error("No local document at '{path}'")]
    Missing { path: String },

    /// The document exists but could not be read.
    #[error("Failed to read '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or holds invalid records.
    #[error("Malformed local document '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but neither a record array nor an object with `projects`.
    #[error("Unrecognized document shape in '{path}'")]
    UnrecognizedShape { path: String },
}

/// Page rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    Registration(#[from] handlebars::TemplateError),

    /// Reading a template or writing the page failed.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
