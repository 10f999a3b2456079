//! Scalar image type with physical metadata.
//!
//! This module provides the Image struct which represents single-component
//! images with a pixel buffer and physical space metadata (origin, spacing,
//! direction).

use ndarray::{ArrayD, IxDyn};

use crate::error::ImageError;
use crate::image::ImageMetadata;
use crate::pixel::Pixel;
use crate::spatial::{Direction, Point, Spacing};

/// A single-component image with physical metadata.
///
/// The Image type combines a pixel buffer with physical space metadata that
/// describes how image indices map to physical coordinates.
///
/// # Type Parameters
/// * `T` - The pixel element type
/// * `D` - The spatial dimensionality (2 or 3)
#[derive(Debug, Clone)]
pub struct Image<T: Pixel, const D: usize> {
    /// The pixel data, one element per grid point.
    data: ArrayD<T>,
    /// Physical space metadata.
    metadata: ImageMetadata<D>,
}

impl<T: Pixel, const D: usize> Image<T, D> {
    /// Create an image from an existing pixel array.
    ///
    /// The array's rank must equal the image's spatial dimension `D`.
    pub fn from_array(data: ArrayD<T>, metadata: ImageMetadata<D>) -> Result<Self, ImageError> {
        if data.ndim() != D {
            return Err(ImageError::DimensionMismatch {
                expected: D,
                found: data.ndim(),
            });
        }
        Ok(Self { data, metadata })
    }

    /// Create an image from a flat pixel buffer in row-major order.
    pub fn from_shape_vec(
        shape: [usize; D],
        pixels: Vec<T>,
        metadata: ImageMetadata<D>,
    ) -> Result<Self, ImageError> {
        let expected: usize = shape.iter().product();
        let len = pixels.len();
        let data = ArrayD::from_shape_vec(IxDyn(&shape), pixels).map_err(|_| {
            ImageError::BufferLength {
                len,
                expected,
                shape: shape.to_vec(),
            }
        })?;
        Ok(Self { data, metadata })
    }

    /// Get the image size along each axis.
    pub fn shape(&self) -> [usize; D] {
        let mut shape = [0usize; D];
        shape.copy_from_slice(self.data.shape());
        shape
    }

    /// Get the total number of grid points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the image holds any pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel data.
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Get the physical space metadata.
    pub fn metadata(&self) -> &ImageMetadata<D> {
        &self.metadata
    }

    /// Get the origin (physical coordinate of first pixel).
    pub fn origin(&self) -> &Point<D> {
        self.metadata.origin()
    }

    /// Get the spacing (physical distance between pixels).
    pub fn spacing(&self) -> &Spacing<D> {
        self.metadata.spacing()
    }

    /// Get the direction (orientation matrix).
    pub fn direction(&self) -> &Direction<D> {
        self.metadata.direction()
    }

    /// Get the pixel at a grid coordinate, if it is inside the grid.
    pub fn get(&self, index: [usize; D]) -> Option<&T> {
        self.data.get(IxDyn(&index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let pixels: Vec<u8> = (0..12).collect();
        let image =
            Image::<u8, 2>::from_shape_vec([3, 4], pixels, ImageMetadata::default()).unwrap();

        assert_eq!(image.shape(), [3, 4]);
        assert_eq!(image.len(), 12);
        assert_eq!(image.get([0, 0]), Some(&0));
        assert_eq!(image.get([2, 3]), Some(&11));
        assert_eq!(image.get([3, 0]), None);
    }

    #[test]
    fn test_image_rejects_wrong_buffer_length() {
        let err = Image::<u8, 2>::from_shape_vec([3, 4], vec![0; 5], ImageMetadata::default())
            .unwrap_err();
        assert!(matches!(err, ImageError::BufferLength { len: 5, expected: 12, .. }));
    }

    #[test]
    fn test_image_rejects_wrong_rank() {
        let data = ArrayD::<f32>::zeros(IxDyn(&[2, 2, 2]));
        let err = Image::<f32, 2>::from_array(data, ImageMetadata::default()).unwrap_err();
        assert!(matches!(err, ImageError::DimensionMismatch { expected: 2, found: 3 }));
    }
}
