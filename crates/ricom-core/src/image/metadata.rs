//! Image metadata types.
//!
//! This module provides types for representing image metadata
//! such as origin, spacing, and direction.

use crate::spatial::{Direction, Point, Spacing};

/// Image metadata containing physical space information.
///
/// Metadata describes how image indices map to physical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetadata<const D: usize> {
    /// Physical coordinate of the first pixel (index 0, 0, ...).
    origin: Point<D>,
    /// Physical distance between pixels along each axis.
    spacing: Spacing<D>,
    /// Orientation of the image axes.
    direction: Direction<D>,
}

impl<const D: usize> ImageMetadata<D> {
    /// Create new image metadata.
    pub fn new(origin: Point<D>, spacing: Spacing<D>, direction: Direction<D>) -> Self {
        Self {
            origin,
            spacing,
            direction,
        }
    }

    /// Get the origin.
    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Get the spacing.
    pub fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    /// Get the direction.
    pub fn direction(&self) -> &Direction<D> {
        &self.direction
    }

    /// Compare two metadata sets component-wise within a tolerance.
    ///
    /// Used to decide whether two images occupy the same physical grid
    /// before composing them.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        for i in 0..D {
            if (self.origin[i] - other.origin[i]).abs() > tolerance {
                return false;
            }
            if (self.spacing[i] - other.spacing[i]).abs() > tolerance {
                return false;
            }
            for j in 0..D {
                if (self.direction[(i, j)] - other.direction[(i, j)]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl<const D: usize> Default for ImageMetadata<D> {
    fn default() -> Self {
        Self {
            origin: Point::origin(),
            spacing: Spacing::uniform(1.0),
            direction: Direction::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Point3 = Point<3>;
    type Spacing3 = Spacing<3>;
    type Direction3 = Direction<3>;

    #[test]
    fn test_metadata_creation() {
        let origin = Point3::new([0.0, 0.0, 0.0]);
        let spacing = Spacing3::new([1.0, 1.0, 1.0]);
        let direction = Direction3::identity();
        let metadata = ImageMetadata::new(origin, spacing, direction);
        assert_eq!(metadata.origin(), &origin);
        assert_eq!(metadata.spacing(), &spacing);
        assert_eq!(metadata.direction(), &direction);
    }

    #[test]
    fn test_metadata_default() {
        let metadata = ImageMetadata::<3>::default();
        assert_eq!(metadata.origin(), &Point3::origin());
        assert_eq!(metadata.spacing(), &Spacing3::uniform(1.0));
        assert_eq!(metadata.direction(), &Direction3::identity());
    }

    #[test]
    fn test_metadata_approx_eq() {
        let a = ImageMetadata::<3>::default();
        let mut b = a.clone();
        assert!(a.approx_eq(&b, 1e-6));

        b = ImageMetadata::new(
            Point3::new([0.0, 0.0, 1e-9]),
            Spacing3::uniform(1.0),
            Direction3::identity(),
        );
        assert!(a.approx_eq(&b, 1e-6));

        b = ImageMetadata::new(
            Point3::new([0.0, 0.0, 0.5]),
            Spacing3::uniform(1.0),
            Direction3::identity(),
        );
        assert!(!a.approx_eq(&b, 1e-6));
    }
}
