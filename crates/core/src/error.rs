use thiserror::Error;

use crate::model::{ImageRefError, WeightInputError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    WeightInput(#[from] WeightInputError),
    #[error(transparent)]
    ImageRef(#[from] ImageRefError),
}
