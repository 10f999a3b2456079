//! Body of one type specialization.

use anyhow::{Context, Result};
use tracing::{debug, info};

use ricom_core::filter::ComposeImageFilter;
use ricom_core::image::Image;
use ricom_io::{read_nifti, write_nifti_vector, IoPixel};

use crate::pipeline::Pipeline;

/// Bind the full option set, compose the moving and fixed images, and hand
/// the result to the output sink.
///
/// `T` and `D` are the element type and dimension the dispatcher resolved
/// from the input image; both inputs must decode to exactly that pair.
pub fn run_compose<T, const D: usize>(pipeline: &Pipeline) -> Result<()>
where
    T: IoPixel,
{
    let options = pipeline.parse_options()?;

    let moving: Image<T, D> = read_nifti(&options.input_image)
        .with_context(|| format!("reading input image {}", options.input_image.display()))?;
    let fixed: Image<T, D> = read_nifti(&options.fixed_image)
        .with_context(|| format!("reading fixed image {}", options.fixed_image.display()))?;

    let mut filter = ComposeImageFilter::new();
    filter.push_input(moving);
    filter.push_input(fixed);

    let information = filter.update_output_information()?;
    debug!(
        spacing = ?information.spacing().to_vec(),
        origin = ?information.origin().to_vec(),
        "validated output geometry"
    );

    let composed = filter.update()?;
    println!("output components count {}", composed.components_per_pixel());

    write_nifti_vector(&options.output_image, &composed)
        .with_context(|| format!("writing output image {}", options.output_image.display()))?;
    info!(path = %options.output_image.display(), "wrote composed image");

    Ok(())
}
