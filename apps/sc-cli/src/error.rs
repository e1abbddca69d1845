//! Error type for the command-line front end.

use sc_project::ProjectError;
use sc_system::SystemError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Evaluation failed: {0}")]
    System(#[from] SystemError),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
