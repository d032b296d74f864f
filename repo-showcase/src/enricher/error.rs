//! Enrichment error types.

use thiserror::Error;

/// An optional enrichment field could not be obtained.
///
/// Always absorbed by the caller, which substitutes an empty default.
#[derive(Debug, Error)]
pub enum EnrichmentUnavailable {
    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },

    /// The request or body decoding failed.
    #[error("request failed: {0}")]
    Transport(#[from] octocrab::Error),

    /// The request URL could not be formed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    /// Upstream answered successfully with nothing usable.
    #[error("upstream returned no content")]
    Empty,
}
