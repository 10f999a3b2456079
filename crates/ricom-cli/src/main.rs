use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use ricom_cli::{dispatch, Pipeline};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let pipeline = Pipeline::from_env();
    match dispatch(&pipeline) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
