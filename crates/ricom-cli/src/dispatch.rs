//! Runtime type dispatch.
//!
//! One compiled code path exists per supported (element type, dimension)
//! pair. The registry lists them in declared priority order; dispatch probes
//! the input image and hands control to the first matching entry. Exactly one
//! specialization executes per invocation.

use anyhow::Result;
use tracing::debug;

use ricom_core::pixel::PixelType;
use ricom_io::peek_nifti;

use crate::compose::run_compose;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;

/// One compiled (element type, dimension) code path.
pub struct Specialization {
    /// Element type this code path was compiled for.
    pub pixel_type: PixelType,
    /// Spatial dimension this code path was compiled for.
    pub dimension: usize,
    run: fn(&Pipeline) -> Result<()>,
}

macro_rules! specializations {
    ($(($ty:ty, $tag:ident)),+ $(,)?) => {
        vec![
            $(
                Specialization {
                    pixel_type: PixelType::$tag,
                    dimension: 2,
                    run: run_compose::<$ty, 2>,
                },
                Specialization {
                    pixel_type: PixelType::$tag,
                    dimension: 3,
                    run: run_compose::<$ty, 3>,
                },
            )+
        ]
    };
}

/// The supported specializations, in dispatch priority order.
pub fn registry() -> Vec<Specialization> {
    specializations![
        (u8, UInt8),
        (i8, Int8),
        (u16, UInt16),
        (i16, Int16),
        (f32, Float32),
        (f64, Float64),
    ]
}

/// Resolve the input image's (element type, dimension) pair and transfer
/// control to the matching specialization.
///
/// Fails with [`PipelineError::UnsupportedType`] before any composition work
/// when no specialization matches; no output is produced in that case.
pub fn dispatch(pipeline: &Pipeline) -> Result<()> {
    let input = match pipeline.pre_parse()? {
        Some(path) => path,
        None => {
            // No input image to probe; the full parse reports the missing
            // required option.
            pipeline.parse_options()?;
            anyhow::bail!("--input-image is required");
        }
    };

    let probe = peek_nifti(&input)?;
    debug!(
        datatype = %probe.datatype,
        dimension = probe.dimension,
        "probed input image"
    );

    let specialization = registry()
        .into_iter()
        .find(|s| Some(s.pixel_type) == probe.pixel_type && s.dimension == probe.dimension)
        .ok_or(PipelineError::UnsupportedType {
            datatype: probe.datatype,
            dimension: probe.dimension,
        })?;

    (specialization.run)(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_the_declared_cross_product() {
        let entries = registry();
        assert_eq!(entries.len(), 12);

        let expected_order = [
            PixelType::UInt8,
            PixelType::Int8,
            PixelType::UInt16,
            PixelType::Int16,
            PixelType::Float32,
            PixelType::Float64,
        ];
        for (i, pixel_type) in expected_order.into_iter().enumerate() {
            assert_eq!(entries[2 * i].pixel_type, pixel_type);
            assert_eq!(entries[2 * i].dimension, 2);
            assert_eq!(entries[2 * i + 1].pixel_type, pixel_type);
            assert_eq!(entries[2 * i + 1].dimension, 3);
        }
    }

    #[test]
    fn test_registry_has_no_match_for_unsupported_pairs() {
        let entries = registry();
        assert!(!entries
            .iter()
            .any(|s| s.dimension == 4 || s.dimension == 1));
    }
}
