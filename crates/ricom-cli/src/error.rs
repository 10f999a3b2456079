//! Pipeline error taxonomy.

use thiserror::Error;

/// Errors raised before composition starts.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required option was absent at full parse.
    #[error(transparent)]
    MissingOption(clap::Error),

    /// The option set failed to bind for some other reason.
    #[error(transparent)]
    Usage(clap::Error),

    /// The input image's element type or dimension has no compiled
    /// specialization.
    #[error("unsupported input image: element type `{datatype}` with dimension {dimension}")]
    UnsupportedType { datatype: String, dimension: usize },
}
