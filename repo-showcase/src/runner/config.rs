//! Runner configuration.

use crate::config::ShowcaseSettings;
use crate::presentation::ProjectQuery;
use std::path::{Path, PathBuf};

/// Configuration for one generate run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Account whose repositories are listed.
    account: String,
    /// GitHub token, if any.
    token: Option<String>,
    /// Settings from the config file.
    settings: ShowcaseSettings,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(account: impl Into<String>, token: Option<String>) -> Self {
        Self {
            account: account.into(),
            token,
            settings: ShowcaseSettings::default(),
        }
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: ShowcaseSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets a custom output path.
    #[must_use]
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.settings.output = output;
        self
    }

    /// Returns the account identifier.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the settings.
    pub fn settings(&self) -> &ShowcaseSettings {
        &self.settings
    }

    /// Returns the output document path.
    pub fn output(&self) -> &Path {
        &self.settings.output
    }
}

/// Configuration for rendering the static page.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Local document to load.
    input: PathBuf,
    /// Page to write.
    output: PathBuf,
    /// Account for the API fallback; no fallback without one.
    account: Option<String>,
    /// GitHub token, if any.
    token: Option<String>,
    /// Settings from the config file.
    settings: ShowcaseSettings,
    /// Visitor selection applied to the card grid.
    query: ProjectQuery,
}

impl RenderConfig {
    /// Creates a render configuration.
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            account: None,
            token: None,
            settings: ShowcaseSettings::default(),
            query: ProjectQuery::default(),
        }
    }

    /// Enables the API fallback for `account`.
    #[must_use]
    pub fn with_fallback(mut self, account: Option<String>, token: Option<String>) -> Self {
        self.account = account;
        self.token = token;
        self
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: ShowcaseSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the query applied to the card grid.
    #[must_use]
    pub fn with_query(mut self, query: ProjectQuery) -> Self {
        self.query = query;
        self
    }

    /// Returns the local document path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the page path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the fallback account, if any.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the settings.
    pub fn settings(&self) -> &ShowcaseSettings {
        &self.settings
    }

    /// Returns the card grid query.
    pub fn query(&self) -> &ProjectQuery {
        &self.query
    }
}
