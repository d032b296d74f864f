#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod collector;
pub mod config;
pub mod enricher;
pub mod normalizer;
pub mod presentation;
pub mod ranker;
pub mod rate_limit;
pub mod runner;
pub mod sink;
pub mod summary;

pub use client::GitHubClient;
pub use collector::{collect_repositories, LicenseSummary, RepositorySummary, UpstreamError};
pub use config::{load_settings, ConfigError, ShowcaseSettings, DEFAULT_CONFIG_FILE};
pub use enricher::{
    derive_excerpt, enrich_repository, fetch_contributors, fetch_readme, ContributorSummary,
    EnrichOptions, Enrichment, EnrichmentUnavailable,
};
pub use normalizer::{normalize, thumbnail_url, Contributor, ProjectRecord, Screenshot};
pub use presentation::{
    load_app_state, AppState, Fallback, LoadStatus, LocalDataUnavailable, PageRenderer,
    ProjectQuery, RenderError, SortKey,
};
pub use ranker::{rank, FEATURED_COUNT};
pub use rate_limit::{advise_core_rate_limit, check_core_rate_limit, RateLimitInfo};
pub use runner::{render_site, RenderConfig, Runner, RunnerConfig, RunnerError};
pub use sink::{DirectSink, DocumentSink, PersistenceError, ProjectSink, ProjectsDocument};
pub use summary::{ProcessingResult, RunSummary};
