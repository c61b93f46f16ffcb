//! Error types for the visualizer boundary
//!
//! The sort routines themselves are infallible over valid slices; everything
//! that can go wrong happens at the edges — reading user-supplied data,
//! parsing command-line arguments, or touching the filesystem. [`VizError`]
//! covers those cases. Input errors are recoverable: the caller reports them
//! and keeps its previous array, no partial data is ever adopted.

use std::fmt;
use std::io;

/// Errors surfaced at the input and CLI boundary
#[derive(Debug)]
pub enum VizError {
    /// A line of user-supplied data did not parse as an integer
    NonIntegerToken { line: usize, token: String },

    /// User-supplied data contained no values at all
    EmptyInput,

    /// Underlying I/O failure (file read/write)
    Io(io::Error),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::NonIntegerToken { line, token } => {
                write!(f, "line {}: '{}' is not an integer", line, token)
            }
            VizError::EmptyInput => {
                write!(f, "input contained no values")
            }
            VizError::Io(e) => {
                write!(f, "I/O error: {}", e)
            }
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VizError {
    fn from(e: io::Error) -> Self {
        VizError::Io(e)
    }
}
