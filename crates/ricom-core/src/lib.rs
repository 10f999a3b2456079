pub mod error;
pub mod filter;
pub mod image;
pub mod pixel;
pub mod spatial;

pub use error::{ComposeError, ImageError};
pub use filter::ComposeImageFilter;
pub use image::{Image, ImageMetadata, VectorImage};
pub use pixel::{Pixel, PixelType};
pub use spatial::{Direction, Point, Spacing, Vector};
