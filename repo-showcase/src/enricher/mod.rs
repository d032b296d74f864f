//! Per-repository enrichment (offline path only).
//!
//! Fetches a README excerpt and the top contributors of one repository.
//! Each field fails independently: a failure is returned as
//! [`EnrichmentUnavailable`] and never aborts the run.

mod contributor;
mod error;
mod excerpt;

pub use contributor::ContributorSummary;
pub use error::EnrichmentUnavailable;
pub use excerpt::{derive_excerpt, ELLIPSIS};

use crate::client::GitHubClient;
use crate::config::ShowcaseSettings;
use http::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Serialize;
use tracing::{debug, info_span, Instrument};

/// Media type asking GitHub for the README body as raw text.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";

/// Limits applied while enriching.
#[derive(Debug, Clone, Copy)]
pub struct EnrichOptions {
    /// Maximum excerpt length in characters.
    pub excerpt_max_length: usize,
    /// Maximum contributors requested.
    pub contributor_limit: u8,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self::from(&ShowcaseSettings::default())
    }
}

impl From<&ShowcaseSettings> for EnrichOptions {
    fn from(settings: &ShowcaseSettings) -> Self {
        Self {
            excerpt_max_length: settings.excerpt_max_length,
            contributor_limit: settings.contributor_limit,
        }
    }
}

/// Outcome of enriching one repository; each field independently.
#[derive(Debug)]
pub struct Enrichment {
    /// Derived README excerpt.
    pub readme_excerpt: Result<String, EnrichmentUnavailable>,
    /// Top contributors in upstream order.
    pub contributors: Result<Vec<ContributorSummary>, EnrichmentUnavailable>,
}

#[derive(Debug, Serialize)]
struct ContributorParams {
    per_page: u8,
}

/// Enriches one repository with its README excerpt and contributors.
///
/// The two requests are issued one after the other.
pub async fn enrich_repository(
    client: &GitHubClient,
    full_name: &str,
    options: EnrichOptions,
) -> Enrichment {
    let span = info_span!("enrich", repo = %full_name);

    async {
        let readme_excerpt = fetch_readme(client, full_name)
            .await
            .map(|raw| derive_excerpt(&raw, options.excerpt_max_length));
        if let Err(e) = &readme_excerpt {
            debug!(error = %e, "README unavailable");
        }

        let contributors = fetch_contributors(client, full_name, options.contributor_limit).await;
        if let Err(e) = &contributors {
            debug!(error = %e, "Contributors unavailable");
        }

        Enrichment {
            readme_excerpt,
            contributors,
        }
    }
    .instrument(span)
    .await
}

/// Fetches a repository README as raw text.
///
/// # Errors
///
/// Returns [`EnrichmentUnavailable`] on a non-success status, a transport
/// failure, or an empty body.
pub async fn fetch_readme(
    client: &GitHubClient,
    full_name: &str,
) -> Result<String, EnrichmentUnavailable> {
    let uri: http::Uri = client
        .url_for(&format!("/repos/{full_name}/readme"))
        .parse()?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(RAW_MEDIA_TYPE));

    let response = client
        .octocrab()
        ._get_with_headers(uri, Some(headers))
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(EnrichmentUnavailable::Status {
            status: status.as_u16(),
        });
    }

    let body = client.octocrab().body_to_string(response).await?;
    if body.trim().is_empty() {
        return Err(EnrichmentUnavailable::Empty);
    }
    Ok(body)
}

/// Fetches up to `limit` contributors, ordered by contribution count upstream.
///
/// # Errors
///
/// Returns [`EnrichmentUnavailable`] if the request fails or the list is empty.
pub async fn fetch_contributors(
    client: &GitHubClient,
    full_name: &str,
    limit: u8,
) -> Result<Vec<ContributorSummary>, EnrichmentUnavailable> {
    let route = format!("/repos/{full_name}/contributors");
    let params = ContributorParams { per_page: limit };

    let contributors: Vec<ContributorSummary> =
        client.octocrab().get(&route, Some(&params)).await?;

    if contributors.is_empty() {
        return Err(EnrichmentUnavailable::Empty);
    }
    Ok(contributors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_settings() {
        let settings = ShowcaseSettings {
            excerpt_max_length: 200,
            contributor_limit: 5,
            ..Default::default()
        };

        let options = EnrichOptions::from(&settings);
        assert_eq!(options.excerpt_max_length, 200);
        assert_eq!(options.contributor_limit, 5);
    }

    #[test]
    fn default_options_match_offline_limits() {
        let options = EnrichOptions::default();
        assert_eq!(options.excerpt_max_length, 1400);
        assert_eq!(options.contributor_limit, 10);
    }
}
