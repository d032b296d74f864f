//! Run summary types.

use super::result::ProcessingResult;
use std::path::PathBuf;

/// Summary of a complete generate run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Account whose repositories were listed.
    pub account: String,

    /// Number of repositories listed.
    pub repositories_collected: usize,

    /// Repositories whose README was fetched, even if its excerpt is empty.
    pub readmes_found: usize,

    /// Repositories whose README was unavailable.
    pub readmes_unavailable: usize,

    /// Repositories with at least one contributor.
    pub contributors_found: usize,

    /// Repositories whose contributor list was unavailable.
    pub contributors_unavailable: usize,

    /// Number of featured projects.
    pub featured: usize,

    /// Sum of stars over all projects.
    pub total_stars: u64,

    /// Where the document was written.
    pub output_path: PathBuf,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(account: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            account: account.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// Updates the summary with one repository's enrichment result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        if result.readme_found {
            self.readmes_found += 1;
        } else {
            self.readmes_unavailable += 1;
        }

        if result.contributors > 0 {
            self.contributors_found += 1;
        } else {
            self.contributors_unavailable += 1;
        }
    }

    /// Returns true if every repository was fully enriched.
    #[must_use]
    pub fn fully_enriched(&self) -> bool {
        self.readmes_unavailable == 0 && self.contributors_unavailable == 0
    }
}
