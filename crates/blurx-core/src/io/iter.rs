//! Lazy, single-pass iteration over decoded images.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use super::{list_image_paths, load_image, DecodedImage, LoadError};

/// Lifecycle of an [`ImageIter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Nothing has been pulled yet.
    Created,
    /// The last pull produced a decoded image.
    Yielding,
    /// Every path has been consumed.
    Exhausted,
    /// A decode failed; no further items are produced.
    Failed,
}

impl LoaderState {
    /// True once the iterator will never yield again.
    pub fn is_terminal(self) -> bool {
        matches!(self, LoaderState::Exhausted | LoaderState::Failed)
    }
}

/// Decodes one image per call to `next`.
///
/// Paths are known up front; pixels are only read when the consumer asks for
/// them. The first decode error is returned once, after which the iterator is
/// finished. It cannot be rewound: build a new one over the same paths to
/// iterate again.
#[derive(Debug)]
pub struct ImageIter {
    paths: std::vec::IntoIter<PathBuf>,
    state: LoaderState,
}

impl ImageIter {
    /// Resolve `root` eagerly and decode its images lazily.
    ///
    /// # Errors
    ///
    /// Any error from [`list_image_paths`]; nothing is decoded at this point.
    pub fn from_root<P: AsRef<Path>>(root: P) -> Result<Self, LoadError> {
        list_image_paths(root).map(Self::from_paths)
    }

    /// Iterate over an explicit list of paths, in the given order.
    ///
    /// The paths are not checked here; a missing or unsupported file surfaces
    /// as `LoadError::InvalidImage` when it is reached.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        Self {
            paths: paths.into_iter(),
            state: LoaderState::Created,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Paths not yet pulled. Zero once the iterator has failed.
    pub fn remaining(&self) -> usize {
        match self.state {
            LoaderState::Failed => 0,
            _ => self.paths.len(),
        }
    }
}

impl Iterator for ImageIter {
    type Item = Result<(PathBuf, DecodedImage), LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_terminal() {
            return None;
        }

        let Some(path) = self.paths.next() else {
            self.state = LoaderState::Exhausted;
            return None;
        };

        match load_image(&path) {
            Ok(image) => {
                self.state = LoaderState::Yielding;
                Some(Ok((path, image)))
            }
            Err(e) => {
                self.state = LoaderState::Failed;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A failure can cut the sequence short at any point
        (0, Some(self.remaining()))
    }
}

impl FusedIterator for ImageIter {}

/// Read images under `path` one at a time.
///
/// Shorthand for [`ImageIter::from_root`].
pub fn iter_images<P: AsRef<Path>>(path: P) -> Result<ImageIter, LoadError> {
    ImageIter::from_root(path)
}
