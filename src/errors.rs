/*!
 * Error types for the xliffdoc application.
 *
 * The export itself cannot fail; these errors cover reading documentation
 * dumps and writing translation files, using the thiserror crate for
 * ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading a documentation export
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be read
    #[error("Failed to read input {path:?}: {message}")]
    Unreadable {
        /// Input path
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },

    /// The file is not a valid documentation export
    #[error("Invalid documentation export {path:?}: {message}")]
    Malformed {
        /// Input path
        path: PathBuf,
        /// Parser message with line and column
        message: String,
    },

    /// Input path is neither a file nor a directory
    #[error("Input path does not exist: {0:?}")]
    Missing(PathBuf),
}

/// Errors that can occur when writing a translation file
#[derive(Error, Debug)]
pub enum OutputError {
    /// Output exists and overwriting was not requested
    #[error("Output file already exists: {0:?}. Use -f to force overwrite.")]
    AlreadyExists(PathBuf),

    /// Writing failed
    #[error("Failed to write {path:?}: {message}")]
    WriteFailed {
        /// Output path
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
}

/// Error of a single-file export run
#[derive(Error, Debug)]
pub enum AppError {
    /// Error reading input
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Error writing output
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}
