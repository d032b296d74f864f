//! Upstream contributor entry.

use serde::Deserialize;

/// One entry of `GET /repos/{full_name}/contributors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributorSummary {
    pub login: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub contributions: Option<u64>,
}
