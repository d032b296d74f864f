//! Upstream repository summary as returned by the listing endpoint.

use serde::Deserialize;

/// One repository exactly as GitHub describes it, before normalization.
///
/// Every field is optional: upstream omits or nulls fields freely and the
/// normalizer owns the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositorySummary {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub size: Option<u64>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
    pub language: Option<String>,
    pub license: Option<LicenseSummary>,
    pub default_branch: Option<String>,
}

/// License block of a repository summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseSummary {
    pub spdx_id: Option<String>,
    pub name: Option<String>,
}

impl RepositorySummary {
    /// Returns the `owner/name` identifier, if upstream supplied one.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref().filter(|n| !n.is_empty())
    }
}
