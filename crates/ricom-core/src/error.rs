//! Error types for image construction and composition.

use thiserror::Error;

/// Errors raised while constructing an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The pixel buffer's rank does not match the image's spatial dimension.
    #[error("expected a {expected}-dimensional pixel array, found {found} axes")]
    DimensionMismatch { expected: usize, found: usize },

    /// The pixel buffer does not hold exactly one element per grid point.
    #[error("pixel buffer holds {len} elements but shape {shape:?} requires {expected}")]
    BufferLength {
        len: usize,
        expected: usize,
        shape: Vec<usize>,
    },
}

/// Errors raised by the compose filter.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The filter was updated without any inputs.
    #[error("compose filter has no inputs")]
    NoInputs,

    /// An input's grid size differs from the first input's.
    #[error("input {index} has size {found:?} but input 0 has size {expected:?}")]
    RegionMismatch {
        index: usize,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// An input's origin, spacing, or direction differs from the first input's.
    #[error("input {index} disagrees with input 0 on origin, spacing, or direction")]
    GeometryMismatch { index: usize },

    #[error(transparent)]
    Image(#[from] ImageError),
}
