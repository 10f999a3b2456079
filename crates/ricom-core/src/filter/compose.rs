//! Compose image filter.
//!
//! This module provides ComposeImageFilter which packs N single-component
//! input images into one N-component vector image. Input k becomes
//! component k of every output pixel.

use crate::error::ComposeError;
use crate::image::{Image, ImageMetadata, VectorImage};
use crate::pixel::Pixel;

/// Tolerance for deciding that two inputs share the same physical grid.
const GEOMETRY_TOLERANCE: f64 = 1e-6;

/// Compose image filter.
///
/// Merges single-component inputs of identical element type, dimension, size,
/// and geometry into one multi-component output. The output's spatial
/// metadata is copied from the shared input metadata, never recomputed.
///
/// The metadata-only pass ([`update_output_information`]) and the full pixel
/// merge ([`update`]) are separate steps so geometry validation can run
/// without touching pixel data.
///
/// [`update_output_information`]: ComposeImageFilter::update_output_information
/// [`update`]: ComposeImageFilter::update
///
/// # Type Parameters
/// * `T` - The pixel element type
/// * `D` - The spatial dimensionality (2 or 3)
pub struct ComposeImageFilter<T: Pixel, const D: usize> {
    inputs: Vec<Image<T, D>>,
}

impl<T: Pixel, const D: usize> ComposeImageFilter<T, D> {
    /// Create a compose filter with no inputs.
    pub fn new() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Append an input image.
    ///
    /// Inputs are merged in push order: the k-th pushed image becomes
    /// component k of the output.
    pub fn push_input(&mut self, image: Image<T, D>) {
        self.inputs.push(image);
    }

    /// Get the number of inputs, which equals the output component count.
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Metadata-only pass: validate input grids and derive output metadata.
    ///
    /// Checks, without reading pixel data, that every input matches input 0
    /// in size and in origin/spacing/direction. Returns the shared metadata,
    /// which the merge copies onto the output verbatim.
    pub fn update_output_information(&self) -> Result<ImageMetadata<D>, ComposeError> {
        let first = self.inputs.first().ok_or(ComposeError::NoInputs)?;
        for (index, input) in self.inputs.iter().enumerate().skip(1) {
            if input.shape() != first.shape() {
                return Err(ComposeError::RegionMismatch {
                    index,
                    expected: first.shape().to_vec(),
                    found: input.shape().to_vec(),
                });
            }
            if !input.metadata().approx_eq(first.metadata(), GEOMETRY_TOLERANCE) {
                return Err(ComposeError::GeometryMismatch { index });
            }
        }
        Ok(first.metadata().clone())
    }

    /// Full pass: merge every input pixel into the multi-component output.
    ///
    /// Runs the metadata pass first; on any mismatch no output is produced.
    /// Every output pixel is fully populated from all inputs at the same
    /// grid coordinate.
    pub fn update(&self) -> Result<VectorImage<T, D>, ComposeError> {
        let metadata = self.update_output_information()?;
        let shape = self.inputs[0].shape();
        let num_pixels = self.inputs[0].len();
        let components = self.inputs.len();

        // Interleave component values per grid coordinate, in row-major
        // order, matching the trailing component axis of VectorImage.
        let mut iters: Vec<_> = self.inputs.iter().map(|input| input.data().iter()).collect();
        let mut pixels = Vec::with_capacity(num_pixels * components);
        for _ in 0..num_pixels {
            for iter in iters.iter_mut() {
                // Each iterator yields exactly num_pixels elements; sizes
                // were validated by the metadata pass.
                if let Some(value) = iter.next() {
                    pixels.push(*value);
                }
            }
        }

        Ok(VectorImage::from_interleaved(
            shape, components, pixels, metadata,
        )?)
    }
}

impl<T: Pixel, const D: usize> Default for ComposeImageFilter<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComposeError;

    fn constant_image(shape: [usize; 2], value: u8) -> Image<u8, 2> {
        let count = shape.iter().product();
        Image::from_shape_vec(shape, vec![value; count], ImageMetadata::default()).unwrap()
    }

    #[test]
    fn test_no_inputs_is_an_error() {
        let filter = ComposeImageFilter::<u8, 2>::new();
        assert!(matches!(
            filter.update_output_information(),
            Err(ComposeError::NoInputs)
        ));
    }

    #[test]
    fn test_information_pass_reports_region_mismatch() {
        let mut filter = ComposeImageFilter::new();
        filter.push_input(constant_image([4, 4], 10));
        filter.push_input(constant_image([5, 5], 20));

        let err = filter.update_output_information().unwrap_err();
        match err {
            ComposeError::RegionMismatch {
                index,
                expected,
                found,
            } => {
                assert_eq!(index, 1);
                assert_eq!(expected, vec![4, 4]);
                assert_eq!(found, vec![5, 5]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(filter.update().is_err());
    }

    #[test]
    fn test_information_pass_accepts_matching_grids() {
        let mut filter = ComposeImageFilter::new();
        filter.push_input(constant_image([4, 4], 10));
        filter.push_input(constant_image([4, 4], 20));

        let information = filter.update_output_information().unwrap();
        assert_eq!(information, ImageMetadata::default());
    }
}
