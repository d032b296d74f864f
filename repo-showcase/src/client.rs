//! GitHub API client construction.

use crate::collector::UpstreamError;
use crate::config::DEFAULT_API_BASE_URL;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::debug;
use url::Url;

/// A GitHub client bound to one API endpoint, optionally authenticated.
///
/// Without a token requests are anonymous and subject to GitHub's stricter
/// unauthenticated rate limits.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    base_url: String,
    authenticated: bool,
}

impl GitHubClient {
    /// Builds a client for the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Client`] if the HTTP client cannot be built.
    pub fn new(token: Option<&str>) -> Result<Self, UpstreamError> {
        Self::with_base_url(DEFAULT_API_BASE_URL, token)
    }

    /// Builds a client for a custom API endpoint (GitHub Enterprise, test servers).
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Client`] if `base_url` is not a valid URL or
    /// the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Result<Self, UpstreamError> {
        let parsed = Url::parse(base_url).map_err(|e| UpstreamError::Client {
            message: format!("invalid API base URL '{base_url}': {e}"),
        })?;
        let base_url = parsed.as_str().trim_end_matches('/').to_string();

        // A failed request fails its stage; octocrab would otherwise retry 5xx.
        let mut builder = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(base_url.as_str())
            .map_err(|e| UpstreamError::Client {
                message: e.to_string(),
            })?;

        let token = token.map(str::trim).filter(|t| !t.is_empty());
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        let octocrab = builder.build().map_err(|e| UpstreamError::Client {
            message: e.to_string(),
        })?;

        debug!(base_url = %base_url, authenticated = token.is_some(), "Built GitHub client");
        Ok(Self {
            octocrab,
            base_url,
            authenticated: token.is_some(),
        })
    }

    /// Returns the underlying octocrab client.
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    /// Returns the API base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether requests carry a credential.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Joins an API route (starting with `/`) onto the base URL.
    pub(crate) fn url_for(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}
