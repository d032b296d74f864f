//! Repository collection.
//!
//! Lists every repository of an account, most recently updated first, by
//! walking fixed-size pages until a short page marks the end.

mod error;
mod summary;

pub use error::UpstreamError;
pub use summary::{LicenseSummary, RepositorySummary};

use crate::client::GitHubClient;
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};

/// Repositories requested per page.
pub const PAGE_SIZE: usize = 100;

/// Query string of a listing request.
#[derive(Debug, Serialize)]
struct ListParams {
    per_page: usize,
    page: u32,
    sort: &'static str,
}

/// Collects all repositories visible for `account`.
///
/// Pages are requested one at a time starting at page 1. A page holding
/// fewer than [`PAGE_SIZE`] items is the last one; no total-count header is
/// consulted.
///
/// # Errors
///
/// Returns [`UpstreamError::EmptyAccount`] for a blank account and
/// [`UpstreamError::Listing`] as soon as any page request fails.
pub async fn collect_repositories(
    client: &GitHubClient,
    account: &str,
) -> Result<Vec<RepositorySummary>, UpstreamError> {
    let account = account.trim();
    if account.is_empty() {
        return Err(UpstreamError::EmptyAccount);
    }

    let span = info_span!("collect", account = %account);

    async {
        info!("Listing repositories");

        let route = format!("/users/{account}/repos");
        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let params = ListParams {
                per_page: PAGE_SIZE,
                page,
                sort: "updated",
            };

            let items: Vec<RepositorySummary> = client
                .octocrab()
                .get(&route, Some(&params))
                .await
                .map_err(|source| UpstreamError::Listing {
                    account: account.to_string(),
                    page,
                    source,
                })?;

            let count = items.len();
            debug!(page, count, "Fetched page");
            repositories.extend(items);

            if count < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        info!(count = repositories.len(), pages = page, "Listing complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_summary() {
        let summary: RepositorySummary = serde_json::from_str(
            r#"{"name": "tiny", "full_name": "octocat/tiny", "license": null, "topics": null}"#,
        )
        .unwrap();

        assert_eq!(summary.name.as_deref(), Some("tiny"));
        assert_eq!(summary.full_name(), Some("octocat/tiny"));
        assert!(summary.license.is_none());
        assert!(summary.topics.is_none());
        assert!(summary.stargazers_count.is_none());
    }

    #[test]
    fn ignores_unconsumed_fields() {
        let summary: RepositorySummary = serde_json::from_str(
            r#"{
                "id": 1296269,
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "owner": {"login": "octocat"},
                "private": false,
                "stargazers_count": 80,
                "license": {"key": "mit", "spdx_id": "MIT", "name": "MIT License"}
            }"#,
        )
        .unwrap();

        assert_eq!(summary.stargazers_count, Some(80));
        let license = summary.license.unwrap();
        assert_eq!(license.spdx_id.as_deref(), Some("MIT"));
        assert_eq!(license.name.as_deref(), Some("MIT License"));
    }

    #[tokio::test]
    async fn rejects_blank_account() {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let client = GitHubClient::new(None).unwrap();
        let result = collect_repositories(&client, "   ").await;

        assert!(matches!(result, Err(UpstreamError::EmptyAccount)));
    }
}
