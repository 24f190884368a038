//! Error types for the data-loader crate.
//!
//! Only the loader can fail: once a `FilmographyIndex` is built, every
//! read accessor is infallible.

use thiserror::Error;

/// Errors that can occur while reading and parsing the filmography file
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the data file couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// A gender restriction that is neither "male" nor "female".
///
/// Raised when parsing user input, never while loading the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown gender restriction \"{0}\"; expected male or female")]
pub struct ParseGenderError(pub String);

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
