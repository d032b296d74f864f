//! Application state owned by the presentation layer.

use crate::normalizer::ProjectRecord;
use serde::Serialize;
use tracing::info;

/// Where the displayed collection came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// The local document was loaded.
    LocalDataLoaded,

    /// No usable local document; fetching from the API.
    FallbackInProgress,

    /// The API fetch succeeded.
    FallbackSucceeded,

    /// Neither source produced data.
    FullyFailed {
        /// Why the fallback failed.
        reason: String,
    },
}

impl LoadStatus {
    /// Returns the status as a string for template rendering.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalDataLoaded => "local_data_loaded",
            Self::FallbackInProgress => "fallback_in_progress",
            Self::FallbackSucceeded => "fallback_succeeded",
            Self::FullyFailed { .. } => "fully_failed",
        }
    }

    /// Short user-facing description of the status.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::LocalDataLoaded => "Showing projects from the generated snapshot.",
            Self::FallbackInProgress => "Local data unavailable, loading projects from GitHub…",
            Self::FallbackSucceeded => "Showing live projects fetched from GitHub.",
            Self::FullyFailed { .. } => "Projects could not be loaded.",
        }
    }

    /// How to fix the situation, for the failed state only.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::FullyFailed { .. } => Some(
                "Run `repo-showcase generate --account <name>` to create projects.json, \
                 or check your network connection and try again.",
            ),
            _ => None,
        }
    }
}

/// The collection on display plus how it was obtained.
///
/// Created once at startup and replaced wholesale on reload; never edited
/// record by record.
#[derive(Debug, Clone)]
pub struct AppState {
    projects: Vec<ProjectRecord>,
    status: LoadStatus,
    generated_at: Option<String>,
}

impl AppState {
    /// Creates an empty state in the given status.
    #[must_use]
    pub fn new(status: LoadStatus) -> Self {
        Self {
            projects: Vec::new(),
            status,
            generated_at: None,
        }
    }

    /// Replaces the whole collection and the status.
    pub fn replace(&mut self, projects: Vec<ProjectRecord>, status: LoadStatus) {
        info!(count = projects.len(), status = status.as_str(), "Project state replaced");
        self.projects = projects;
        self.status = status;
    }

    /// Clears the collection and enters the failed state.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.replace(
            Vec::new(),
            LoadStatus::FullyFailed {
                reason: reason.into(),
            },
        );
    }

    /// Records when the displayed snapshot was generated.
    pub fn set_generated_at(&mut self, generated_at: Option<String>) {
        self.generated_at = generated_at;
    }

    /// Returns the displayed projects.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Returns the current status.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Returns the snapshot time, if known.
    pub fn generated_at(&self) -> Option<&str> {
        self.generated_at.as_deref()
    }
}
