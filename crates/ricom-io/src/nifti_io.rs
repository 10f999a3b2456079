//! NIfTI image source and sink.
//!
//! The reader side has two entry points with very different costs:
//! [`peek_nifti`] inspects only the header to learn the stored element type
//! and spatial rank, and [`read_nifti`] materializes the full voxel volume as
//! a typed [`Image`]. The writer side serializes scalar and multi-component
//! images.

use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::{Quaternion, UnitQuaternion};
use nifti::volume::element::DataElement;
use nifti::writer::WriterOptions;
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, NiftiType, ReaderOptions};

use ricom_core::image::{Image, ImageMetadata, VectorImage};
use ricom_core::pixel::{Pixel, PixelType};
use ricom_core::spatial::{Direction, Point, Spacing};

/// Element types the NIfTI codec can move between disk and memory.
///
/// This seam keeps the codec's own element traits out of core and CLI
/// signatures. The writer serializes raw element bytes, hence the `Pod`
/// bound.
pub trait IoPixel: Pixel + DataElement + bytemuck::Pod {}

impl<T: Pixel + DataElement + bytemuck::Pod> IoPixel for T {}

/// Result of a header-only inspection of an input image.
#[derive(Debug, Clone)]
pub struct ImageProbe {
    /// The stored element type, if it maps into the supported set.
    pub pixel_type: Option<PixelType>,
    /// On-disk datatype name, kept for diagnostics even when unsupported.
    pub datatype: String,
    /// Number of spatial axes.
    pub dimension: usize,
}

/// Read just enough of a NIfTI file to learn its element type and dimension.
///
/// Only the header is parsed; voxel data is never touched. This backs the
/// pre-parse phase of the pipeline, which must choose a type specialization
/// before binding the full option set.
pub fn peek_nifti<P: AsRef<Path>>(path: P) -> Result<ImageProbe> {
    let path = path.as_ref();
    let header = NiftiHeader::from_file(path)
        .with_context(|| format!("failed to read NIfTI header from {}", path.display()))?;
    let nifti_type = header
        .data_type()
        .with_context(|| format!("unrecognised NIfTI datatype in {}", path.display()))?;

    let pixel_type = match nifti_type {
        NiftiType::Uint8 => Some(PixelType::UInt8),
        NiftiType::Int8 => Some(PixelType::Int8),
        NiftiType::Uint16 => Some(PixelType::UInt16),
        NiftiType::Int16 => Some(PixelType::Int16),
        NiftiType::Float32 => Some(PixelType::Float32),
        NiftiType::Float64 => Some(PixelType::Float64),
        _ => None,
    };

    Ok(ImageProbe {
        pixel_type,
        datatype: format!("{nifti_type:?}").to_lowercase(),
        dimension: header.dim[0] as usize,
    })
}

/// Read a scalar NIfTI image as `Image<T, D>`.
///
/// The stored rank must equal `D`; spatial metadata is derived from the
/// header's sform when present, else its qform, else the pixdim fields.
pub fn read_nifti<T, const D: usize, P>(path: P) -> Result<Image<T, D>>
where
    T: IoPixel,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let obj = ReaderOptions::new()
        .read_file(path)
        .with_context(|| format!("failed to read NIfTI file {}", path.display()))?;
    let metadata = metadata_from_header(obj.header());

    let volume = obj.into_volume();
    let data = volume
        .into_ndarray::<T>()
        .with_context(|| format!("failed to decode voxel data from {}", path.display()))?;
    if data.ndim() != D {
        bail!(
            "{}: expected a {D}-dimensional image, found {} axes",
            path.display(),
            data.ndim()
        );
    }

    Ok(Image::from_array(data, metadata)?)
}

/// Write a scalar image to a NIfTI file.
///
/// The image's origin, spacing, and direction are carried in the header's
/// sform so they survive a read back through [`read_nifti`].
pub fn write_nifti<T, const D: usize, P>(path: P, image: &Image<T, D>) -> Result<()>
where
    T: IoPixel,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let header = header_from_metadata(image.metadata());
    WriterOptions::new(path)
        .reference_header(&header)
        .write_nifti(image.data())
        .with_context(|| format!("failed to write NIfTI file {}", path.display()))
}

/// Write a multi-component image to a NIfTI file.
///
/// NIfTI stores per-voxel vector data past the time axis (dim\[5\]), so the
/// spatial axes are padded with singletons up to four before the component
/// axis. A 2-D two-component image is stored with dims [x, y, 1, 1, 2]
/// rather than as a bogus 3-D scalar volume.
pub fn write_nifti_vector<T, const D: usize, P>(path: P, image: &VectorImage<T, D>) -> Result<()>
where
    T: IoPixel,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut shape: Vec<usize> = image.shape().to_vec();
    while shape.len() < 4 {
        shape.push(1);
    }
    shape.push(image.components_per_pixel());
    let data = image
        .data()
        .clone()
        .into_shape(shape)
        .context("failed to reshape component data for NIfTI layout")?;

    let header = header_from_metadata(image.metadata());
    WriterOptions::new(path)
        .reference_header(&header)
        .write_nifti(&data)
        .with_context(|| format!("failed to write NIfTI file {}", path.display()))
}

/// Build a header whose sform encodes the image's spatial metadata.
///
/// srow columns are the direction columns scaled by spacing, the fourth
/// column is the origin. Axes past `D` stay at identity so 2-D metadata
/// embeds cleanly in the 3-D affine.
fn header_from_metadata<const D: usize>(metadata: &ImageMetadata<D>) -> NiftiHeader {
    let mut rows = [[0.0f32; 4]; 3];
    for (r, row) in rows.iter_mut().enumerate() {
        row[r] = 1.0;
    }
    for r in 0..D {
        for c in 0..D {
            rows[r][c] = (metadata.direction()[(r, c)] * metadata.spacing()[c]) as f32;
        }
        rows[r][3] = metadata.origin()[r] as f32;
    }

    let mut header = NiftiHeader::default();
    header.sform_code = 1;
    header.srow_x = rows[0];
    header.srow_y = rows[1];
    header.srow_z = rows[2];
    header
}

/// Derive origin, spacing, and direction from a NIfTI header.
///
/// The full 3-D affine is assembled first; for `D == 2` its top-left block
/// and the first two translations are taken. Spacing is the column norms and
/// direction the normalized columns, matching how the affine encodes both.
fn metadata_from_header<const D: usize>(header: &NiftiHeader) -> ImageMetadata<D> {
    let (matrix, translation) = spatial_affine(header);

    let mut origin = Point::<D>::origin();
    let mut spacing = Spacing::<D>::uniform(1.0);
    let mut direction = Direction::<D>::identity();

    for i in 0..D {
        origin[i] = translation[i];
    }
    for c in 0..D {
        let norm = (0..D).map(|r| matrix[r][c] * matrix[r][c]).sum::<f64>().sqrt();
        if norm > 1e-9 {
            spacing[c] = norm;
            for r in 0..D {
                direction[(r, c)] = matrix[r][c] / norm;
            }
        }
    }

    ImageMetadata::new(origin, spacing, direction)
}

/// Assemble the 3-D rotation/scaling matrix and translation of a header.
///
/// Precedence follows the NIfTI standard: sform if present, else qform,
/// else a diagonal built from pixdim.
fn spatial_affine(header: &NiftiHeader) -> ([[f64; 3]; 3], [f64; 3]) {
    if header.sform_code > 0 {
        let rows = [header.srow_x, header.srow_y, header.srow_z];
        let mut matrix = [[0.0f64; 3]; 3];
        let mut translation = [0.0f64; 3];
        for r in 0..3 {
            for c in 0..3 {
                matrix[r][c] = rows[r][c] as f64;
            }
            translation[r] = rows[r][3] as f64;
        }
        (matrix, translation)
    } else if header.qform_code > 0 {
        let b = header.quatern_b as f64;
        let c = header.quatern_c as f64;
        let d = header.quatern_d as f64;
        let a = (1.0 - (b * b + c * c + d * d)).max(0.0).sqrt();
        let rotation = UnitQuaternion::from_quaternion(Quaternion::new(a, b, c, d));
        let rotation = rotation.to_rotation_matrix();

        let qfac = if header.pixdim[0] == 0.0 {
            1.0
        } else {
            header.pixdim[0] as f64
        };
        let scales = [
            header.pixdim[1] as f64,
            header.pixdim[2] as f64,
            header.pixdim[3] as f64 * qfac,
        ];

        let mut matrix = [[0.0f64; 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                matrix[r][c] = rotation.matrix()[(r, c)] * scales[c];
            }
        }
        let translation = [
            header.quatern_x as f64,
            header.quatern_y as f64,
            header.quatern_z as f64,
        ];
        (matrix, translation)
    } else {
        let mut matrix = [[0.0f64; 3]; 3];
        for i in 0..3 {
            matrix[i][i] = header.pixdim[i + 1] as f64;
        }
        (matrix, [0.0f64; 3])
    }
}
