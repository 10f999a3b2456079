//! Two-phase option parsing.
//!
//! Option binding happens in two explicit steps. The pre-parse pulls out only
//! the input image path so the dispatcher can probe its type before a
//! specialization exists; the full parse, run inside the chosen
//! specialization, binds and validates every declared option.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::PipelineError;

/// The complete option set, bound during the full-parse phase.
#[derive(Debug, Parser)]
#[command(
    name = "compose-images",
    about = "Merge a moving and a fixed image into one two-component image"
)]
pub struct Options {
    /// Moving image; becomes component 0 of the output.
    #[arg(long, value_name = "INPUT_IMAGE")]
    pub input_image: PathBuf,

    /// Fixed image; becomes component 1 of the output.
    #[arg(long, value_name = "INPUT_IMAGE")]
    pub fixed_image: PathBuf,

    /// Where to write the composed image.
    #[arg(long, value_name = "OUTPUT_IMAGE")]
    pub output_image: PathBuf,
}

/// Lenient mirror of [`Options`] used by the pre-parse phase: every option is
/// optional and parse problems are ignored, so the input image path can be
/// extracted from an otherwise incomplete command line.
#[derive(Debug, Parser)]
#[command(name = "compose-images", disable_help_flag = true, ignore_errors = true)]
struct PreOptions {
    #[arg(long)]
    input_image: Option<PathBuf>,

    #[arg(long)]
    fixed_image: Option<PathBuf>,

    #[arg(long)]
    output_image: Option<PathBuf>,
}

/// One pipeline invocation: the raw arguments, threaded through both parse
/// phases.
#[derive(Debug)]
pub struct Pipeline {
    args: Vec<OsString>,
}

impl Pipeline {
    /// Capture an argument list (including the program name).
    pub fn new<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Capture the process arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    /// Pre-parse phase: extract the input image path, validating nothing else.
    ///
    /// Returns `Ok(None)` when `--input-image` is absent; the caller falls
    /// through to the full parse so the usage error reported is the
    /// authoritative one.
    pub fn pre_parse(&self) -> Result<Option<PathBuf>, PipelineError> {
        let pre = PreOptions::try_parse_from(&self.args).map_err(PipelineError::Usage)?;
        Ok(pre.input_image)
    }

    /// Full-parse phase: bind and validate every declared option.
    pub fn parse_options(&self) -> Result<Options, PipelineError> {
        Options::try_parse_from(&self.args).map_err(|err| match err.kind() {
            ErrorKind::MissingRequiredArgument => PipelineError::MissingOption(err),
            _ => PipelineError::Usage(err),
        })
    }
}
