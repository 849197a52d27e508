//! Error types for tinyfetch-terminal.

use std::path::PathBuf;
use thiserror::Error;

/// A fact collector could not produce a value.
#[derive(Debug, Error)]
pub enum FactError {
    /// The command module's script could not be started.
    #[error("failed to execute script `{script}`: {source}")]
    Spawn {
        script: String,
        #[source]
        source: std::io::Error,
    },

    /// The command module's script exited unsuccessfully.
    #[error("script `{script}` failed ({status}): {output}")]
    Failed {
        script: String,
        status: String,
        output: String,
    },

    /// A `command` row carried no script.
    #[error("command module has no script")]
    MissingScript,
}

/// Errors that abort rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error writing to the terminal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A fact collector failed.
    #[error("{0}")]
    Fact(#[from] FactError),

    /// The title file could not be read.
    #[error("error reading title file {}: {source}", path.display())]
    Title {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
