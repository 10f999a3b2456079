//! Image types and operations.
//!
//! This module provides scalar and multi-component image types that pair a
//! pixel buffer with physical space metadata.

pub mod image;
pub mod metadata;
pub mod vector_image;

pub use image::Image;
pub use metadata::ImageMetadata;
pub use vector_image::VectorImage;
