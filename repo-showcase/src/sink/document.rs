//! Document sink: persists the collection as JSON.

use super::{PersistenceError, ProjectSink};
use crate::normalizer::ProjectRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk shape of the generated document.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsDocument {
    /// When the snapshot was taken, RFC 3339 in UTC.
    pub generated_at: String,
    /// The ranked project records.
    pub projects: Vec<ProjectRecord>,
}

impl ProjectsDocument {
    /// Wraps `projects` with a generation timestamp.
    #[must_use]
    pub fn new(generated_at: DateTime<Utc>, projects: Vec<ProjectRecord>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            projects,
        }
    }
}

/// Writes the collection to a JSON file.
#[derive(Debug, Clone)]
pub struct DocumentSink {
    path: PathBuf,
    generated_at: Option<DateTime<Utc>>,
}

impl DocumentSink {
    /// Creates a sink writing to `path`, stamped with the time of delivery.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            generated_at: None,
        }
    }

    /// Pins the generation timestamp instead of using the current time.
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Returns the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectSink for DocumentSink {
    type Error = PersistenceError;

    fn deliver(&mut self, projects: Vec<ProjectRecord>) -> Result<(), PersistenceError> {
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let document = ProjectsDocument::new(generated_at, projects);
        let json = serde_json::to_string_pretty(&document)?;

        let write_error = |source| PersistenceError::Write {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(&self.path, json + "\n").map_err(write_error)?;

        info!(
            path = %self.path.display(),
            count = document.projects.len(),
            "Wrote project document"
        );
        Ok(())
    }
}
