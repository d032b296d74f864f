//! Normalization of upstream repository summaries into project records.
//!
//! Every upstream field access supplies a default: an absent upstream field
//! never becomes an absent output field.

mod record;

pub use record::{Contributor, ProjectRecord, Screenshot, DEFAULT_BRANCH};

use crate::collector::RepositorySummary;
use crate::enricher::{ContributorSummary, Enrichment, EnrichmentUnavailable};

/// Prefix of the generated social-preview thumbnail.
const THUMBNAIL_BASE: &str = "https://opengraph.githubassets.com/1/";

/// Web host used to derive URLs upstream did not supply.
const WEB_BASE: &str = "https://github.com/";

/// Returns the social-preview thumbnail URL for an `owner/name` identifier.
///
/// Derived without any network call; the image may not exist.
#[must_use]
pub fn thumbnail_url(full_name: &str) -> String {
    format!("{THUMBNAIL_BASE}{full_name}")
}

/// Maps one repository summary, plus optional enrichment, to a [`ProjectRecord`].
///
/// `None` enrichment (the client path) and unavailable enrichment fields
/// both produce an empty excerpt and no contributors. `featured` is always
/// `false` here; the ranker sets it.
#[must_use]
pub fn normalize(summary: &RepositorySummary, enrichment: Option<Enrichment>) -> ProjectRecord {
    let full_name = summary.full_name().map(str::to_string);
    let name = non_empty(summary.name.as_deref())
        .map(str::to_string)
        .or_else(|| {
            full_name
                .as_deref()
                .and_then(|f| f.rsplit('/').next())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "untitled".to_string());

    let identifier = full_name.clone().unwrap_or_else(|| name.clone());

    let repo_url = non_empty(summary.html_url.as_deref())
        .map(str::to_string)
        .or_else(|| full_name.as_ref().map(|f| format!("{WEB_BASE}{f}")))
        .unwrap_or_default();

    let (readme_excerpt, contributors) = match enrichment {
        Some(Enrichment {
            readme_excerpt,
            contributors,
        }) => (
            excerpt_or_default(readme_excerpt),
            contributors_or_default(contributors),
        ),
        None => (String::new(), Vec::new()),
    };

    ProjectRecord {
        name,
        repo_url,
        description: summary.description.clone().unwrap_or_default(),
        tags: dedup_tags(summary.topics.as_deref().unwrap_or_default()),
        stars: summary.stargazers_count.unwrap_or_default(),
        forks: summary.forks_count.unwrap_or_default(),
        open_issues: summary.open_issues_count.unwrap_or_default(),
        size: summary.size.unwrap_or_default(),
        featured: false,
        updated_at: summary.updated_at.clone().unwrap_or_default(),
        created_at: summary.created_at.clone().unwrap_or_default(),
        language: summary.language.clone().unwrap_or_default(),
        license: license_label(summary),
        thumbnail_url: thumbnail_url(&identifier),
        screenshots: Vec::new(),
        default_branch: non_empty(summary.default_branch.as_deref())
            .unwrap_or(DEFAULT_BRANCH)
            .to_string(),
        readme_excerpt,
        contributors,
    }
}

fn excerpt_or_default(excerpt: Result<String, EnrichmentUnavailable>) -> String {
    match excerpt {
        Ok(text) => text,
        Err(_) => String::new(),
    }
}

fn contributors_or_default(
    contributors: Result<Vec<ContributorSummary>, EnrichmentUnavailable>,
) -> Vec<Contributor> {
    match contributors {
        Ok(list) => list.into_iter().filter_map(to_contributor).collect(),
        Err(_) => Vec::new(),
    }
}

fn to_contributor(summary: ContributorSummary) -> Option<Contributor> {
    let login = summary.login.filter(|l| !l.is_empty())?;
    let profile_url = summary
        .html_url
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| format!("{WEB_BASE}{login}"));

    Some(Contributor {
        avatar_url: summary.avatar_url.unwrap_or_default(),
        profile_url,
        contribution_count: summary.contributions.unwrap_or_default(),
        login,
    })
}

/// SPDX identifier when meaningful, otherwise the license's display name.
fn license_label(summary: &RepositorySummary) -> String {
    let Some(license) = &summary.license else {
        return String::new();
    };

    non_empty(license.spdx_id.as_deref())
        .filter(|id| *id != "NOASSERTION")
        .or_else(|| non_empty(license.name.as_deref()))
        .unwrap_or_default()
        .to_string()
}

/// Drops duplicate and blank topics, keeping first-seen order.
fn dedup_tags(topics: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(topics.len());
    for topic in topics {
        let topic = topic.trim();
        if !topic.is_empty() && !tags.iter().any(|t| t == topic) {
            tags.push(topic.to_string());
        }
    }
    tags
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::LicenseSummary;

    fn full_summary() -> RepositorySummary {
        RepositorySummary {
            name: Some("hello".to_string()),
            full_name: Some("octocat/hello".to_string()),
            html_url: Some("https://github.com/octocat/hello".to_string()),
            description: Some("A greeting".to_string()),
            topics: Some(vec!["rust".to_string(), "cli".to_string()]),
            stargazers_count: Some(42),
            forks_count: Some(7),
            open_issues_count: Some(3),
            size: Some(128),
            updated_at: Some("2024-05-01T10:00:00Z".to_string()),
            created_at: Some("2020-01-01T00:00:00Z".to_string()),
            language: Some("Rust".to_string()),
            license: Some(LicenseSummary {
                spdx_id: Some("MIT".to_string()),
                name: Some("MIT License".to_string()),
            }),
            default_branch: Some("trunk".to_string()),
        }
    }

    #[test]
    fn maps_all_fields() {
        let record = normalize(&full_summary(), None);

        assert_eq!(record.name, "hello");
        assert_eq!(record.repo_url, "https://github.com/octocat/hello");
        assert_eq!(record.description, "A greeting");
        assert_eq!(record.tags, vec!["rust", "cli"]);
        assert_eq!(record.stars, 42);
        assert_eq!(record.forks, 7);
        assert_eq!(record.open_issues, 3);
        assert_eq!(record.size, 128);
        assert!(!record.featured);
        assert_eq!(record.updated_at, "2024-05-01T10:00:00Z");
        assert_eq!(record.created_at, "2020-01-01T00:00:00Z");
        assert_eq!(record.language, "Rust");
        assert_eq!(record.license, "MIT");
        assert_eq!(
            record.thumbnail_url,
            "https://opengraph.githubassets.com/1/octocat/hello"
        );
        assert!(record.screenshots.is_empty());
        assert_eq!(record.default_branch, "trunk");
        assert_eq!(record.readme_excerpt, "");
        assert!(record.contributors.is_empty());
    }

    #[test]
    fn fills_defaults_for_missing_fields() {
        let summary = RepositorySummary {
            name: Some("bare".to_string()),
            full_name: Some("octocat/bare".to_string()),
            ..Default::default()
        };

        let record = normalize(&summary, None);

        assert_eq!(record.name, "bare");
        assert_eq!(record.description, "");
        assert!(record.tags.is_empty());
        assert_eq!(record.stars, 0);
        assert_eq!(record.forks, 0);
        assert_eq!(record.open_issues, 0);
        assert_eq!(record.size, 0);
        assert_eq!(record.language, "");
        assert_eq!(record.license, "");
        assert_eq!(record.default_branch, "main");
        assert_eq!(record.repo_url, "https://github.com/octocat/bare");
        assert_eq!(
            record.thumbnail_url,
            "https://opengraph.githubassets.com/1/octocat/bare"
        );
    }

    #[test]
    fn empty_summary_still_yields_named_record() {
        let record = normalize(&RepositorySummary::default(), None);

        assert!(!record.name.is_empty());
        assert_eq!(record.repo_url, "");
        assert_eq!(record.default_branch, DEFAULT_BRANCH);
    }

    #[test]
    fn serialized_record_has_every_field() {
        let record = normalize(&RepositorySummary::default(), None);
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "name",
            "repoUrl",
            "description",
            "tags",
            "stars",
            "forks",
            "openIssues",
            "size",
            "featured",
            "updatedAt",
            "createdAt",
            "language",
            "license",
            "thumbnailUrl",
            "screenshots",
            "defaultBranch",
            "readmeExcerpt",
            "contributors",
        ] {
            assert!(object.contains_key(key), "missing {key}");
            assert!(!object[key].is_null(), "null {key}");
        }
    }

    #[test]
    fn license_falls_back_to_name() {
        let mut summary = full_summary();
        summary.license = Some(LicenseSummary {
            spdx_id: Some("NOASSERTION".to_string()),
            name: Some("Other".to_string()),
        });

        assert_eq!(normalize(&summary, None).license, "Other");
    }

    #[test]
    fn deduplicates_tags_in_order() {
        let mut summary = full_summary();
        summary.topics = Some(vec![
            "web".to_string(),
            "rust".to_string(),
            "web".to_string(),
            " ".to_string(),
        ]);

        assert_eq!(normalize(&summary, None).tags, vec!["web", "rust"]);
    }

    #[test]
    fn applies_enrichment() {
        let enrichment = Enrichment {
            readme_excerpt: Ok("Says hello.".to_string()),
            contributors: Ok(vec![
                ContributorSummary {
                    login: Some("octocat".to_string()),
                    avatar_url: Some("https://avatars.example/octocat".to_string()),
                    html_url: Some("https://github.com/octocat".to_string()),
                    contributions: Some(12),
                },
                ContributorSummary {
                    login: None,
                    ..Default::default()
                },
            ]),
        };

        let record = normalize(&full_summary(), Some(enrichment));

        assert_eq!(record.readme_excerpt, "Says hello.");
        assert_eq!(
            record.contributors,
            vec![Contributor {
                login: "octocat".to_string(),
                avatar_url: "https://avatars.example/octocat".to_string(),
                profile_url: "https://github.com/octocat".to_string(),
                contribution_count: 12,
            }]
        );
    }

    #[test]
    fn unavailable_enrichment_becomes_defaults() {
        let enrichment = Enrichment {
            readme_excerpt: Err(EnrichmentUnavailable::Status { status: 404 }),
            contributors: Err(EnrichmentUnavailable::Empty),
        };

        let record = normalize(&full_summary(), Some(enrichment));

        assert_eq!(record.readme_excerpt, "");
        assert!(record.contributors.is_empty());
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"name": "x", "stars": 5, "language": null}"#).unwrap();

        assert_eq!(record.name, "x");
        assert_eq!(record.stars, 5);
        assert_eq!(record.language, "");
        assert_eq!(record.default_branch, "main");
        assert!(record.tags.is_empty());
    }
}
