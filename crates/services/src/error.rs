//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `TrackerService`.
///
/// None of these reach the user: the service logs them and leaves the state as it was.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error(transparent)]
    Domain(#[from] trainer_core::Error),
}

impl From<trainer_core::model::WeightInputError> for TrackerError {
    fn from(err: trainer_core::model::WeightInputError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<trainer_core::model::ImageRefError> for TrackerError {
    fn from(err: trainer_core::model::ImageRefError) -> Self {
        Self::Domain(err.into())
    }
}
