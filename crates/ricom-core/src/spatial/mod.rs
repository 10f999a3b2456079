//! Spatial types for representing points, vectors, spacing, and direction matrices.
//!
//! This module provides the fundamental spatial types used throughout ricom.
//! All types are based on nalgebra for efficient linear algebra operations.

pub mod direction;
pub mod point;
pub mod spacing;
pub mod vector;

pub use direction::Direction;
pub use point::Point;
pub use spacing::Spacing;
pub use vector::Vector;
