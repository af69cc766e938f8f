//! Failure taxonomy for the bootstrap pipeline
//!
//! Every stage maps its failures into exactly one of these kinds. All of
//! them are terminal: the pipeline never retries a stage, and the binary
//! turns any failure into a single message and a non-zero exit.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("you have to provide a project name")]
    MissingArgument,

    #[error("a directory called '{0}' already exists")]
    NameCollision(String),

    #[error("the staging directory '{0}' already exists")]
    StagingCollision(String),

    #[error("{tool} is required but could not be found")]
    MissingDependencyTool { tool: &'static str },

    #[error("{tool} v{found} is not supported, v{minimum} or newer is required")]
    UnsupportedToolVersion {
        tool: &'static str,
        found: String,
        minimum: u64,
    },

    /// Network failures, auth failures, and unknown tags all collapse here.
    #[error("the template repository could not be cloned ({reason})")]
    FetchError { reason: String },

    #[error("failed to rename '{}' into '{}': {}", .from.display(), .to.display(), .source)]
    RenameError {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy '{}' to '{}': {}", .from.display(), .to.display(), .source)]
    EnvCopyError {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove '{}': {}", .path.display(), .source)]
    CleanupError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}' ({})", .path.display(), .reason)]
    ManifestWriteError { path: PathBuf, reason: String },

    /// Registry failures and resolution conflicts collapse here as well.
    #[error("failed to install dependencies ({reason})")]
    InstallError { reason: String },
}
