//! CLI for repo-showcase.
//!
//! Generates a project document from a GitHub account and renders it as a
//! static portfolio page.

use clap::{Parser, Subcommand};
use repo_showcase::{
    load_settings, render_site, ProjectQuery, RenderConfig, RunSummary, Runner, RunnerConfig,
    RunnerError, ShowcaseSettings, SortKey, DEFAULT_CONFIG_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repo Showcase - Build a portfolio page from a GitHub account's repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List and enrich an account's repositories into the project document.
    Generate {
        /// GitHub account whose repositories are listed.
        #[arg(long)]
        account: Option<String>,

        /// GitHub Personal Access Token.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Render the project document (or a live API listing) as an HTML page.
    Render {
        /// Project document to load.
        #[arg(long)]
        input: Option<PathBuf>,

        /// HTML page to write.
        #[arg(long, default_value = "index.html")]
        output: PathBuf,

        /// Account used when the document is unavailable.
        #[arg(long)]
        account: Option<String>,

        /// GitHub Personal Access Token.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Only show projects matching this text.
        #[arg(long, default_value = "")]
        search: String,

        /// Only show projects with this tag.
        #[arg(long)]
        tag: Option<String>,

        /// Sort order: stars, forks, updated or name.
        #[arg(long, default_value_t = SortKey::Stars)]
        sort: SortKey,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // octocrab enables rustls' ring provider too, so neither is picked implicitly.
    // Err means a provider is already installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            error!(error = %e, "Critical failure");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), RunnerError> {
    let settings = match &args.config {
        Some(path) => load_settings(path, true)?,
        None => load_settings(&PathBuf::from(DEFAULT_CONFIG_FILE), false)?,
    };

    match args.command {
        Command::Generate { account, token } => {
            let account = resolve_account(account, &settings)?;
            let config = RunnerConfig::new(account, token).with_settings(settings);
            let runner = Runner::new(config)?;
            let summary = runner.run().await?;
            print_summary(&summary);
        }
        Command::Render {
            input,
            output,
            account,
            token,
            search,
            tag,
            sort,
        } => {
            let input = input.unwrap_or_else(|| settings.output.clone());
            let account = account.or_else(|| settings.account.clone());
            if account.is_none() {
                warn!("No account given; the API fallback is disabled");
            }
            let query = ProjectQuery { search, tag, sort };
            let config = RenderConfig::new(input, output)
                .with_fallback(account, token)
                .with_settings(settings)
                .with_query(query);
            let status = render_site(&config).await?;
            if let Some(hint) = status.hint() {
                warn!(status = status.as_str(), "{hint}");
            }
        }
    }

    Ok(())
}

/// Picks the account from the flag, then the config file.
fn resolve_account(
    flag: Option<String>,
    settings: &ShowcaseSettings,
) -> Result<String, RunnerError> {
    flag.or_else(|| settings.account.clone())
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| RunnerError::Upstream(repo_showcase::UpstreamError::EmptyAccount))
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Account: {}", summary.account);
    println!(
        "  Repositories collected: {}",
        summary.repositories_collected
    );
    println!(
        "  READMEs: {} found, {} unavailable",
        summary.readmes_found, summary.readmes_unavailable
    );
    println!(
        "  Contributors: {} found, {} unavailable",
        summary.contributors_found, summary.contributors_unavailable
    );
    println!("  Featured: {}", summary.featured);
    println!("  Total stars: {}", summary.total_stars);
    println!("  Output: {}", summary.output_path.display());
}
