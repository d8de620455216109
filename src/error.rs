//! Error type for startup and the program boundary.

use std::io;
use std::path::PathBuf;

/// Everything that can stop the program with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Standard input failed before a single line could be read.
    #[error("failed to read standard input: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The log file given on the command line could not be opened.
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A global logger was already installed.
    #[error("failed to install logger: {0}")]
    Logger(String),

    /// The terminal program could not start or failed while running.
    #[error("{0}")]
    Program(String),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
