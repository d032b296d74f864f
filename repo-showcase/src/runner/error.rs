//! Runner error types.

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Repository listing or client construction errors.
    #[error(transparent)]
    Upstream(#[from] crate::collector::UpstreamError),

    /// The output document could not be written.
    #[error(transparent)]
    Persistence(#[from] crate::sink::PersistenceError),

    /// The page could not be rendered or written.
    #[error(transparent)]
    Render(#[from] crate::presentation::RenderError),
}
