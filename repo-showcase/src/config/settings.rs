//! Showcase settings deserialization.

use serde::Deserialize;
use std::path::PathBuf;

/// Default name of the generated project document.
pub const DEFAULT_OUTPUT_FILE: &str = "projects.json";

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Parsed contents of a `showcase.toml` file.
///
/// Every key is optional; absent keys take the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ShowcaseSettings {
    /// Account whose repositories are listed (the CLI flag wins).
    #[serde(default)]
    pub account: Option<String>,

    /// Where the generated document is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Maximum README excerpt length in characters, ellipsis included.
    #[serde(default = "default_excerpt_max_length")]
    pub excerpt_max_length: usize,

    /// Maximum contributors requested per repository.
    #[serde(default = "default_contributor_limit")]
    pub contributor_limit: u8,

    /// Base URL of the hosting API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Optional Handlebars template replacing the built-in page layout.
    #[serde(default)]
    pub page_template: Option<PathBuf>,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            account: None,
            output: default_output(),
            excerpt_max_length: default_excerpt_max_length(),
            contributor_limit: default_contributor_limit(),
            api_base_url: default_api_base_url(),
            page_template: None,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_excerpt_max_length() -> usize {
    1400
}

fn default_contributor_limit() -> u8 {
    10
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
