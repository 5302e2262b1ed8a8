//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::CourseError;
use storage::StorageError;

/// Errors emitted by the fallible internals of `ProgressService`.
///
/// The public load/save surface never propagates these; it logs them and
/// degrades to seed data or session-only state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
