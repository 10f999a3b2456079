//! Spacing type for representing physical distances between pixels/voxels.
//!
//! Spacing represents the physical distance between adjacent pixels/voxels
//! along each axis of an image.

use super::Vector;

/// Spacing between adjacent pixels/voxels along each axis.
///
/// Spacing is a vector where each component represents the physical distance
/// between adjacent pixels/voxels along that axis.
///
/// This is a type alias to Vector for semantic clarity.
pub type Spacing<const D: usize> = Vector<D>;

impl<const D: usize> Spacing<D> {
    /// Create uniform spacing (same value for all dimensions).
    pub fn uniform(value: f64) -> Self {
        let mut spacing = Vector::zeros();
        for i in 0..D {
            spacing[i] = value;
        }
        spacing
    }
}
