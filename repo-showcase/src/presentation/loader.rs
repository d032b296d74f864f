//! Local document loading.

use super::LocalDataUnavailable;
use crate::normalizer::ProjectRecord;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Records read from a local document.
#[derive(Debug, Clone, Default)]
pub struct LocalData {
    /// Snapshot time, when the document carries one.
    pub generated_at: Option<String>,
    /// The records, default-complete.
    pub projects: Vec<ProjectRecord>,
}

/// Reads and parses the local document at `path`.
///
/// # Errors
///
/// Returns [`LocalDataUnavailable`] if the file is missing, unreadable or
/// not a recognized shape.
pub fn load_local_document(path: &Path) -> Result<LocalData, LocalDataUnavailable> {
    let shown = path.display().to_string();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LocalDataUnavailable::Missing { path: shown });
        }
        Err(e) => {
            return Err(LocalDataUnavailable::Unreadable {
                path: shown,
                source: e,
            });
        }
    };

    let data = parse_local_document(&content, &shown)?;
    debug!(path = %path.display(), count = data.projects.len(), "Loaded local document");
    Ok(data)
}

/// Parses document text.
///
/// Accepts a bare array of records or an object with a `projects` array.
///
/// # Errors
///
/// Returns [`LocalDataUnavailable::Malformed`] for invalid JSON or records,
/// and [`LocalDataUnavailable::UnrecognizedShape`] for any other shape.
pub fn parse_local_document(content: &str, path: &str) -> Result<LocalData, LocalDataUnavailable> {
    let malformed = |source| LocalDataUnavailable::Malformed {
        path: path.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(content).map_err(malformed)?;

    let (generated_at, projects) = match value {
        Value::Array(items) => (None, Value::Array(items)),
        Value::Object(mut object) => match object.remove("projects") {
            Some(projects @ Value::Array(_)) => {
                let generated_at = object
                    .get("generated_at")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                (generated_at, projects)
            }
            _ => {
                return Err(LocalDataUnavailable::UnrecognizedShape {
                    path: path.to_string(),
                })
            }
        },
        _ => {
            return Err(LocalDataUnavailable::UnrecognizedShape {
                path: path.to_string(),
            })
        }
    };

    let projects: Vec<ProjectRecord> = serde_json::from_value(projects).map_err(malformed)?;
    Ok(LocalData {
        generated_at,
        projects,
    })
}
