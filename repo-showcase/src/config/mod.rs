//! Configuration loading.
//!
//! Settings come from an optional `showcase.toml` file. A missing default
//! file means "use the defaults"; a missing file the user named explicitly
//! is an error.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{ShowcaseSettings, DEFAULT_API_BASE_URL, DEFAULT_OUTPUT_FILE};

use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Name of the config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "showcase.toml";

/// Loads settings from `path`.
///
/// When `required` is false and the file does not exist, the defaults are
/// returned instead.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing (and required), unreadable,
/// not valid TOML, or fails validation.
pub fn load_settings(path: &Path, required: bool) -> Result<ShowcaseSettings, ConfigError> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(ShowcaseSettings::default());
    }

    info!(path = %path.display(), "Loading config");
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_settings(&content, path)
}

/// Parses and validates settings from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError`] if the TOML is invalid or a value fails validation.
pub fn parse_settings(content: &str, path: &Path) -> Result<ShowcaseSettings, ConfigError> {
    let settings: ShowcaseSettings =
        toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_settings(&settings, path)?;
    Ok(settings)
}

/// Validates parsed settings.
fn validate_settings(settings: &ShowcaseSettings, path: &Path) -> Result<(), ConfigError> {
    let path_str = path.display().to_string();

    if let Some(account) = &settings.account {
        if account.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path_str,
                message: "account must not be empty".to_string(),
            });
        }
    }

    if settings.excerpt_max_length == 0 {
        return Err(ConfigError::ValidationError {
            path: path_str,
            message: "excerpt-max-length must be greater than zero".to_string(),
        });
    }

    // The contributors endpoint caps per_page at 100
    if settings.contributor_limit == 0 || settings.contributor_limit > 100 {
        return Err(ConfigError::ValidationError {
            path: path_str,
            message: format!(
                "contributor-limit must be between 1 and 100, got {}",
                settings.contributor_limit
            ),
        });
    }

    if let Err(e) = Url::parse(&settings.api_base_url) {
        return Err(ConfigError::ValidationError {
            path: path_str,
            message: format!(
                "api-base-url '{}' is not a valid URL: {e}",
                settings.api_base_url
            ),
        });
    }

    Ok(())
}
