//! Advisory rate limit checks for the GitHub API.
//!
//! The generator never waits or retries; it only warns when a run is
//! likely to exhaust the remaining budget.

use octocrab::Octocrab;
use tracing::{debug, info, warn};

/// Rate limit information for a specific resource.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns true when `planned` requests fit in the remaining budget.
    #[must_use]
    pub fn covers(&self, planned: u32) -> bool {
        self.remaining >= planned
    }
}

/// Checks the current rate limit status for the core API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Logs whether `planned` more requests fit in the core budget.
///
/// Failure to query the budget is logged and otherwise ignored.
pub async fn advise_core_rate_limit(octocrab: &Octocrab, planned: u32) {
    match check_core_rate_limit(octocrab).await {
        Ok(info) if !info.covers(planned) => warn!(
            remaining = info.remaining,
            limit = info.limit,
            reset = info.reset,
            planned,
            "Rate limit budget is lower than the planned requests; some enrichment may be missing"
        ),
        Ok(info) => info!(remaining = info.remaining, limit = info.limit, "Rate limit budget"),
        Err(e) => debug!(error = %e, "Could not query rate limit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_info() {
        let info = RateLimitInfo {
            remaining: 10,
            reset: 1234567890,
            limit: 60,
        };

        assert!(info.covers(10));
        assert!(!info.covers(11));
        assert!(info.covers(0));
    }
}
