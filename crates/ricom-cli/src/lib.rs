//! Command-line pipeline for composing two images into a multi-component image.
//!
//! The pipeline runs in three phases: a pre-parse that probes the input
//! image's element type and dimension, a dispatch over the registry of
//! compiled type specializations, and the specialization body which binds the
//! full option set and performs the composition.

pub mod compose;
pub mod dispatch;
pub mod error;
pub mod pipeline;

pub use dispatch::dispatch;
pub use error::PipelineError;
pub use pipeline::Pipeline;
