//! Direct sink: hands the collection to the presentation state.

use super::ProjectSink;
use crate::normalizer::ProjectRecord;
use crate::presentation::{AppState, LoadStatus};
use std::convert::Infallible;

/// Replaces the application state's projects with a freshly fetched collection.
///
/// Used by the client fallback; marks the state as
/// [`LoadStatus::FallbackSucceeded`].
pub struct DirectSink<'a> {
    state: &'a mut AppState,
}

impl<'a> DirectSink<'a> {
    /// Creates a sink delivering into `state`.
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }
}

impl ProjectSink for DirectSink<'_> {
    type Error = Infallible;

    fn deliver(&mut self, projects: Vec<ProjectRecord>) -> Result<(), Infallible> {
        self.state.replace(projects, LoadStatus::FallbackSucceeded);
        Ok(())
    }
}
