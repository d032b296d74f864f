//! Per-repository enrichment results.

/// What enrichment produced for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    /// Repository full name.
    pub repository: String,
    /// Whether a README excerpt was obtained.
    pub readme_found: bool,
    /// Contributors obtained; zero when unavailable.
    pub contributors: usize,
}
