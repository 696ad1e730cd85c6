//! Error types for registry generation.
//!
//! [`RegistryError`] covers everything that aborts a run. [`LookupError`] is the
//! recoverable case: the builder turns it into a current-date fallback and keeps going.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

/// Fatal failure of a registry run. No output file is written when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to list posts directory {}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read post {}", .path.display())]
    ReadPost {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize registry")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write registry to {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single history lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("failed to run history command: {0}")]
    Spawn(#[source] io::Error),

    #[error("history command exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("history command produced non-UTF-8 output: {0}")]
    InvalidOutput(#[source] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
