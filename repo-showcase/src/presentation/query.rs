//! Search, tag filtering and sorting of the displayed collection.

use crate::normalizer::ProjectRecord;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Sort order offered to the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most stars first.
    #[default]
    Stars,
    /// Most forks first.
    Forks,
    /// Most recently updated first.
    Updated,
    /// Alphabetical, case-insensitive.
    Name,
}

impl SortKey {
    /// Returns the key as its command-line spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::Updated => "updated",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stars" => Ok(Self::Stars),
            "forks" => Ok(Self::Forks),
            "updated" => Ok(Self::Updated),
            "name" => Ok(Self::Name),
            other => Err(format!(
                "unknown sort key '{other}', expected one of: stars, forks, updated, name"
            )),
        }
    }
}

/// The visitor's current search, tag and sort selection.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    /// Free text matched case-insensitively against name, description, tags and language.
    pub search: String,
    /// Only records carrying this tag, when set.
    pub tag: Option<String>,
    /// Result order.
    pub sort: SortKey,
}

impl ProjectQuery {
    /// Returns true when `record` passes the search and tag filters.
    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            if !record.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        record.name.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
            || record.language.to_lowercase().contains(&needle)
            || record
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    }

    /// Filters and sorts `records` without modifying them.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        let mut selected: Vec<&ProjectRecord> =
            records.iter().filter(|r| self.matches(r)).collect();

        match self.sort {
            SortKey::Stars => selected.sort_by_key(|r| Reverse(r.stars)),
            SortKey::Forks => selected.sort_by_key(|r| Reverse(r.forks)),
            SortKey::Updated => selected.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
            SortKey::Name => selected.sort_by_key(|r| r.name.to_lowercase()),
        }

        selected
    }
}

/// Every tag in the collection, deduplicated, in first-seen order.
#[must_use]
pub fn all_tags(records: &[ProjectRecord]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in records.iter().flat_map(|r| &r.tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
