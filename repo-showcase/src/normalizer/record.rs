//! The normalized project record.

use serde::{Deserialize, Deserializer, Serialize};

/// Branch assumed when upstream does not name one.
pub const DEFAULT_BRANCH: &str = "main";

/// One repository in its normalized, default-complete form.
///
/// Every field is always present. Deserialization fills absent or `null`
/// fields with the same defaults the normalizer uses, so hand-edited
/// documents load with the same guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repo_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub forks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub open_issues: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub license: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub screenshots: Vec<Screenshot>,
    #[serde(deserialize_with = "branch_or_default")]
    pub default_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub readme_excerpt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contributors: Vec<Contributor>,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            repo_url: String::new(),
            description: String::new(),
            tags: Vec::new(),
            stars: 0,
            forks: 0,
            open_issues: 0,
            size: 0,
            featured: false,
            updated_at: String::new(),
            created_at: String::new(),
            language: String::new(),
            license: String::new(),
            thumbnail_url: String::new(),
            screenshots: Vec::new(),
            default_branch: DEFAULT_BRANCH.to_string(),
            readme_excerpt: String::new(),
            contributors: Vec::new(),
        }
    }
}

/// A manually curated screenshot. Never produced by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screenshot {
    pub src: String,
    pub alt: String,
}

/// A repository contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub profile_url: String,
    pub contribution_count: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn branch_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|branch| !branch.is_empty())
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string()))
}
