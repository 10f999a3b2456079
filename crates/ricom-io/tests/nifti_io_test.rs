//! Integration tests for the NIfTI source/sink.

use anyhow::Result;
use ricom_core::filter::ComposeImageFilter;
use ricom_core::image::{Image, ImageMetadata};
use ricom_core::pixel::PixelType;
use ricom_core::spatial::{Direction, Point, Spacing};
use ricom_io::{peek_nifti, read_nifti, write_nifti, write_nifti_vector};
use tempfile::tempdir;

#[test]
fn test_peek_reports_type_and_dimension() -> Result<()> {
    let dir = tempdir()?;

    let path = dir.path().join("scalar2d.nii");
    let image =
        Image::<u8, 2>::from_shape_vec([4, 4], vec![10; 16], ImageMetadata::default())?;
    write_nifti(&path, &image)?;

    let probe = peek_nifti(&path)?;
    assert_eq!(probe.pixel_type, Some(PixelType::UInt8));
    assert_eq!(probe.dimension, 2);

    let path = dir.path().join("scalar3d.nii");
    let image =
        Image::<f32, 3>::from_shape_vec([2, 3, 4], vec![0.5; 24], ImageMetadata::default())?;
    write_nifti(&path, &image)?;

    let probe = peek_nifti(&path)?;
    assert_eq!(probe.pixel_type, Some(PixelType::Float32));
    assert_eq!(probe.dimension, 3);

    Ok(())
}

#[test]
fn test_peek_flags_unsupported_element_type() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("wide.nii");

    // int32 is a valid NIfTI datatype but outside the supported set, so the
    // fixture is written with the nifti crate directly.
    let array = ndarray::Array2::<i32>::from_elem([2, 2], 7);
    nifti::writer::WriterOptions::new(&path).write_nifti(&array)?;

    let probe = peek_nifti(&path)?;
    assert_eq!(probe.pixel_type, None);
    assert_eq!(probe.datatype, "int32");
    assert_eq!(probe.dimension, 2);

    Ok(())
}

#[test]
fn test_scalar_roundtrip_preserves_data_and_metadata() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("ramp.nii");

    let metadata = ImageMetadata::new(
        Point::new([5.0, 6.0, 7.0]),
        Spacing::new([2.0, 2.0, 2.0]),
        Direction::identity(),
    );
    let pixels: Vec<i16> = (0..24).collect();
    let image = Image::<i16, 3>::from_shape_vec([2, 3, 4], pixels, metadata.clone())?;
    write_nifti(&path, &image)?;

    let loaded: Image<i16, 3> = read_nifti(&path)?;
    assert_eq!(loaded.shape(), [2, 3, 4]);
    assert_eq!(loaded.data(), image.data());
    assert_eq!(loaded.spacing(), metadata.spacing());
    assert_eq!(loaded.origin(), metadata.origin());
    assert_eq!(loaded.direction(), metadata.direction());

    Ok(())
}

#[test]
fn test_read_rejects_wrong_dimension() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("planar.nii");

    let image = Image::<u8, 2>::from_shape_vec([4, 4], vec![1; 16], ImageMetadata::default())?;
    write_nifti(&path, &image)?;

    let result: anyhow::Result<Image<u8, 3>> = read_nifti(&path);
    assert!(result.is_err());

    Ok(())
}

#[test]
fn test_vector_sink_pads_to_component_axis() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("composed.nii");

    let metadata = ImageMetadata::new(
        Point::new([1.0, 2.0]),
        Spacing::new([0.5, 0.5]),
        Direction::identity(),
    );
    let mut filter = ComposeImageFilter::new();
    filter.push_input(Image::<u8, 2>::from_shape_vec(
        [4, 4],
        vec![10; 16],
        metadata.clone(),
    )?);
    filter.push_input(Image::<u8, 2>::from_shape_vec(
        [4, 4],
        vec![20; 16],
        metadata,
    )?);
    let composed = filter.update()?;

    write_nifti_vector(&path, &composed)?;

    // Components must land past the time axis: dims [4, 4, 1, 1, 2].
    use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
    let obj = ReaderOptions::new().read_file(&path)?;
    assert_eq!(obj.header().dim[0], 5);
    // The shared input geometry rides along in the sform.
    assert_eq!(obj.header().sform_code, 1);
    assert_eq!(obj.header().srow_x, [0.5, 0.0, 0.0, 1.0]);
    assert_eq!(obj.header().srow_y, [0.0, 0.5, 0.0, 2.0]);
    let volume = obj.into_volume().into_ndarray::<u8>()?;
    assert_eq!(volume.shape(), &[4, 4, 1, 1, 2]);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(volume[[y, x, 0, 0, 0]], 10);
            assert_eq!(volume[[y, x, 0, 0, 1]], 20);
        }
    }

    Ok(())
}
