//! Pixel element typing.
//!
//! Images are generic over the numeric type of their pixel components. The
//! supported set is closed: the dispatch registry in the CLI is built from
//! exactly the types that implement [`Pixel`].

use std::fmt;

/// Runtime tag for a pixel element type.
///
/// This is the element half of the dispatch key; the other half is the
/// spatial dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    UInt8,
    Int8,
    UInt16,
    Int16,
    Float32,
    Float64,
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelType::UInt8 => "uint8",
            PixelType::Int8 => "int8",
            PixelType::UInt16 => "uint16",
            PixelType::Int16 => "int16",
            PixelType::Float32 => "float32",
            PixelType::Float64 => "float64",
        };
        f.write_str(name)
    }
}

/// A scalar type usable as a pixel element.
///
/// Implemented for the closed set of supported element types; each
/// implementation carries its runtime [`PixelType`] tag so generic code can
/// be matched against a runtime-discovered input type.
pub trait Pixel: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The runtime tag corresponding to this element type.
    const PIXEL_TYPE: PixelType;
}

macro_rules! impl_pixel {
    ($($ty:ty => $tag:ident),+ $(,)?) => {
        $(
            impl Pixel for $ty {
                const PIXEL_TYPE: PixelType = PixelType::$tag;
            }
        )+
    };
}

impl_pixel! {
    u8 => UInt8,
    i8 => Int8,
    u16 => UInt16,
    i16 => Int16,
    f32 => Float32,
    f64 => Float64,
}
