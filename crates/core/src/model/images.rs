use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImageRefError {
    #[error("image reference cannot be empty")]
    Empty,
}

/// A progress photo picked from the local file system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    /// # Errors
    ///
    /// Returns `ImageRefError::Empty` if the path is empty.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ImageRefError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ImageRefError::Empty);
        }
        Ok(Self(path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Value suitable for an `<img src>` attribute.
    #[must_use]
    pub fn display_src(&self) -> String {
        self.0.display().to_string()
    }
}

/// Photos added during the session, oldest first. Nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressImages {
    items: Vec<ImageRef>,
}

impl ProgressImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, image: ImageRef) {
        self.items.push(image);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.items.iter()
    }
}

impl Extend<ImageRef> for ProgressImages {
    fn extend<I: IntoIterator<Item = ImageRef>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
