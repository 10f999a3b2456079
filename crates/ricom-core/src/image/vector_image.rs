//! Multi-component image type.
//!
//! A vector image stores a fixed-length vector of elements at every grid
//! point. The pixel buffer carries one extra trailing axis holding the
//! components, so a D-dimensional vector image has a buffer of rank D + 1.

use ndarray::{ArrayD, IxDyn};

use crate::error::ImageError;
use crate::image::ImageMetadata;
use crate::pixel::Pixel;
use crate::spatial::{Direction, Point, Spacing};

/// A multi-component image with physical metadata.
///
/// Component k of every pixel comes from input k of the compose operation
/// that produced the image.
///
/// # Type Parameters
/// * `T` - The pixel element type
/// * `D` - The spatial dimensionality (2 or 3)
#[derive(Debug, Clone)]
pub struct VectorImage<T: Pixel, const D: usize> {
    /// Pixel data with D spatial axes plus a trailing component axis.
    data: ArrayD<T>,
    /// Physical space metadata of the spatial grid.
    metadata: ImageMetadata<D>,
}

impl<T: Pixel, const D: usize> VectorImage<T, D> {
    /// Create a vector image from a flat buffer of interleaved components.
    ///
    /// The buffer is in row-major grid order with the components of each
    /// pixel adjacent, matching the trailing component axis.
    pub fn from_interleaved(
        shape: [usize; D],
        components: usize,
        pixels: Vec<T>,
        metadata: ImageMetadata<D>,
    ) -> Result<Self, ImageError> {
        let mut full_shape = shape.to_vec();
        full_shape.push(components);
        let expected: usize = full_shape.iter().product();
        let len = pixels.len();
        let data = ArrayD::from_shape_vec(IxDyn(&full_shape), pixels).map_err(|_| {
            ImageError::BufferLength {
                len,
                expected,
                shape: full_shape.clone(),
            }
        })?;
        Ok(Self { data, metadata })
    }

    /// Get the spatial size along each axis (excluding the component axis).
    pub fn shape(&self) -> [usize; D] {
        let mut shape = [0usize; D];
        shape.copy_from_slice(&self.data.shape()[..D]);
        shape
    }

    /// Get the number of components stored at each grid point.
    pub fn components_per_pixel(&self) -> usize {
        self.data.shape()[D]
    }

    /// Get the pixel data, component axis last.
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

    /// Get one component of the pixel at a grid coordinate.
    pub fn get(&self, index: [usize; D], component: usize) -> Option<&T> {
        let mut full_index = index.to_vec();
        full_index.push(component);
        self.data.get(IxDyn(&full_index))
    }
}
