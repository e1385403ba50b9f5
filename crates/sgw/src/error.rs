//! Error types for sector gateway operations.

use std::io;
use std::path::PathBuf;

/// Result type for sector gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing gateway configuration.
///
/// Every variant is terminal for a single invocation: the binary prints the
/// message with an `ERROR: ` prefix and exits with code 1.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process is not running with an effective uid of 0.
    #[error("this command must be run as root")]
    NotRoot,

    /// A config file expected by `get` or `restart` is absent.
    #[error("{} does not exist", path.display())]
    MissingConfig {
        /// The config path that was not found.
        path: PathBuf,
    },

    /// An external command exited with a non-zero status.
    #[error("command failed: {command}")]
    CommandFailed {
        /// The exact command line that failed, argv joined with spaces.
        command: String,
    },

    /// I/O error from filesystem or process operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing-config error for a path.
    pub fn missing_config(path: impl Into<PathBuf>) -> Self {
        Self::MissingConfig { path: path.into() }
    }

    /// Create a command-failed error from an argv slice.
    pub fn command_failed(argv: &[&str]) -> Self {
        Self::CommandFailed {
            command: argv.join(" "),
        }
    }
}
