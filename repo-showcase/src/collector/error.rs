//! Repository listing error types.

use thiserror::Error;

/// Errors that abort repository collection.
///
/// Any failed page aborts the whole listing; no partial results are returned.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The GitHub client could not be constructed.
    #[error("Failed to build GitHub client: {message}")]
    Client { message: String },

    /// No account identifier was supplied.
    #[error("Account identifier must not be empty")]
    EmptyAccount,

    /// A page request failed (non-success status or transport error).
    #[error("GitHub API error listing repositories for '{account}' (page {page}): {source}")]
    Listing {
        account: String,
        page: u32,
        #[source]
        source: octocrab::Error,
    },
}
