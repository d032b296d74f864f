//! Orchestrates generate and render runs.

mod config;
mod error;

pub use config::{RenderConfig, RunnerConfig};
pub use error::RunnerError;

use crate::client::GitHubClient;
use crate::collector::{collect_repositories, RepositorySummary};
use crate::enricher::{enrich_repository, EnrichOptions};
use crate::normalizer::{normalize, ProjectRecord};
use crate::presentation::{load_app_state, Fallback, LoadStatus, PageRenderer};
use crate::ranker::rank;
use crate::rate_limit::advise_core_rate_limit;
use crate::sink::{DocumentSink, ProjectSink};
use crate::summary::{ProcessingResult, RunSummary};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

/// Requests issued per repository during enrichment (README, contributors).
const REQUESTS_PER_REPOSITORY: u32 = 2;

/// Orchestrates the offline path: collect, enrich, normalize, rank, persist.
pub struct Runner {
    config: RunnerConfig,
    client: GitHubClient,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::with_base_url(&config.settings().api_base_url, config.token())?;
        if !client.is_authenticated() {
            warn!("No GitHub token supplied; anonymous rate limits apply");
        }
        Ok(Self { config, client })
    }

    /// Executes the full generate flow.
    ///
    /// Listing failures abort the run. Enrichment failures only leave
    /// defaults in the affected records.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let account = self.config.account();
        let mut summary = RunSummary::new(account, self.config.output());

        let summaries = collect_repositories(&self.client, account).await?;
        summary.repositories_collected = summaries.len();

        if summaries.is_empty() {
            warn!(account, "No repositories found");
        } else {
            let planned = u32::try_from(summaries.len())
                .unwrap_or(u32::MAX)
                .saturating_mul(REQUESTS_PER_REPOSITORY);
            advise_core_rate_limit(self.client.octocrab(), planned).await;
        }

        let options = EnrichOptions::from(self.config.settings());
        let client = &self.client;

        // `then` keeps exactly one repository in flight at a time
        let processed: Vec<(ProjectRecord, ProcessingResult)> = stream::iter(summaries)
            .then(|repo| async move { process_repository(client, repo, options).await })
            .collect()
            .await;

        let mut records = Vec::with_capacity(processed.len());
        for (record, result) in processed {
            summary.record_result(&result);
            records.push(record);
        }

        let ranked = rank(records);
        summary.featured = ranked.iter().filter(|r| r.featured).count();
        summary.total_stars = ranked.iter().map(|r| r.stars).sum();

        DocumentSink::new(self.config.output()).deliver(ranked)?;

        info!(
            account,
            count = summary.repositories_collected,
            output = %self.config.output().display(),
            "Generate run complete"
        );
        Ok(summary)
    }
}

async fn process_repository(
    client: &GitHubClient,
    repository: RepositorySummary,
    options: EnrichOptions,
) -> (ProjectRecord, ProcessingResult) {
    let enrichment = match repository.full_name() {
        Some(full_name) => Some(enrich_repository(client, full_name, options).await),
        None => {
            warn!(name = ?repository.name, "Repository has no full name, skipping enrichment");
            None
        }
    };

    // A README that strips down to nothing was still found
    let readme_found = enrichment
        .as_ref()
        .is_some_and(|e| e.readme_excerpt.is_ok());

    let record = normalize(&repository, enrichment);
    let result = ProcessingResult {
        repository: repository
            .full_name()
            .map_or_else(|| record.name.clone(), str::to_string),
        readme_found,
        contributors: record.contributors.len(),
    };

    (record, result)
}

/// Loads the collection (local document or API fallback) and writes the page.
///
/// A fully failed load still renders the explained empty state.
///
/// # Errors
///
/// Returns an error if the fallback client cannot be built or the page
/// cannot be rendered or written.
pub async fn render_site(config: &RenderConfig) -> Result<LoadStatus, RunnerError> {
    let settings = config.settings();

    let client = match config.account() {
        Some(_) => Some(GitHubClient::with_base_url(
            &settings.api_base_url,
            config.token(),
        )?),
        None => None,
    };
    let fallback = match (&client, config.account()) {
        (Some(client), Some(account)) => Some(Fallback { client, account }),
        _ => None,
    };

    let state = load_app_state(config.input(), fallback).await;

    let title = match config.account() {
        Some(account) => format!("{account} · Projects"),
        None => "Projects".to_string(),
    };
    let renderer = match &settings.page_template {
        Some(path) => PageRenderer::from_template_file(title, path)?,
        None => PageRenderer::new(title)?,
    };
    renderer.render_to_file(&state, config.query(), config.output())?;

    info!(
        output = %config.output().display(),
        status = state.status().as_str(),
        count = state.projects().len(),
        "Rendered page"
    );
    Ok(state.status().clone())
}
