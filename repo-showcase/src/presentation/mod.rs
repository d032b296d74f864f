//! Presentation model for the client path.
//!
//! Loads the local document when one is usable and otherwise falls back to
//! listing repositories straight from the API. Enrichment is skipped on the
//! fallback to bound latency and request volume.

mod error;
mod loader;
mod query;
mod renderer;
mod state;
mod view;

pub use error::{LocalDataUnavailable, RenderError};
pub use loader::{load_local_document, parse_local_document, LocalData};
pub use query::{all_tags, ProjectQuery, SortKey};
pub use renderer::{create_handlebars_registry, PageRenderer, DEFAULT_PAGE_TEMPLATE};
pub use state::{AppState, LoadStatus};
pub use view::{
    gallery, language_distribution, project_card, project_details, project_stats, GalleryFrame,
    LanguageShare, Lightbox, ProjectCard, ProjectDetails, ProjectStats, OTHER_LANGUAGE,
};

use crate::client::GitHubClient;
use crate::collector::collect_repositories;
use crate::normalizer::normalize;
use crate::ranker::rank;
use crate::sink::{DirectSink, ProjectSink};
use std::path::Path;
use tracing::{info, warn};

/// Where to fetch from when the local document is unusable.
#[derive(Clone, Copy)]
pub struct Fallback<'a> {
    /// API client.
    pub client: &'a GitHubClient,
    /// Account to list.
    pub account: &'a str,
}

/// Builds the application state for display.
///
/// Local records are re-ranked so exactly the top three are
/// featured. Without a usable local document and without a fallback, or
/// when the fallback fails, the state is [`LoadStatus::FullyFailed`] with
/// no projects.
pub async fn load_app_state(
    local_document: &Path,
    fallback: Option<Fallback<'_>>,
) -> AppState {
    match load_local_document(local_document) {
        Ok(data) => {
            info!(
                path = %local_document.display(),
                count = data.projects.len(),
                "Using local document"
            );
            let mut state = AppState::new(LoadStatus::FallbackInProgress);
            state.replace(rank(data.projects), LoadStatus::LocalDataLoaded);
            state.set_generated_at(data.generated_at);
            state
        }
        Err(e) => {
            warn!(error = %e, "Local data unavailable, falling back to the API");
            let mut state = AppState::new(LoadStatus::FallbackInProgress);
            match fallback {
                Some(fallback) => fetch_fallback(&mut state, fallback).await,
                None => state.fail("no account configured for the fallback fetch"),
            }
            state
        }
    }
}

/// Client path: Collector → Normalizer (no enrichment) → Ranker → Direct Sink.
async fn fetch_fallback(state: &mut AppState, fallback: Fallback<'_>) {
    let summaries = match collect_repositories(fallback.client, fallback.account).await {
        Ok(summaries) => summaries,
        Err(e) => {
            warn!(account = %fallback.account, error = %e, "Fallback fetch failed");
            state.fail(e.to_string());
            return;
        }
    };

    let records = summaries.iter().map(|s| normalize(s, None)).collect();
    let ranked = rank(records);

    match DirectSink::new(state).deliver(ranked) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
