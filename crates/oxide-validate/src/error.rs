//! Error types for collecting input.

use std::path::PathBuf;

/// Errors that can occur while reading statements.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// Line mode found nothing but blank lines.
    #[error("No statements found in input")]
    Empty,
}

/// Result type for input operations.
pub type Result<T> = std::result::Result<T, InputError>;
