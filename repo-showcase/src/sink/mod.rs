//! Output sinks for a ranked project collection.

mod direct;
mod document;
mod error;

pub use direct::DirectSink;
pub use document::{DocumentSink, ProjectsDocument};
pub use error::PersistenceError;

use crate::normalizer::ProjectRecord;

/// Final destination of one pipeline run.
pub trait ProjectSink {
    /// Failure type; [`std::convert::Infallible`] for sinks that cannot fail.
    type Error;

    /// Consumes the ranked collection.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the collection could not be delivered.
    fn deliver(&mut self, projects: Vec<ProjectRecord>) -> Result<(), Self::Error>;
}
