//! Error types for writing operations

use std::fmt;
use std::io;

/// Errors that can occur while producing a JDiff document
#[derive(Debug)]
pub enum WriteError {
    /// The output sink failed; partial output must be discarded
    Io(io::Error),
    /// The API model could not be decoded
    Model(String),
    /// In-memory output was not valid UTF-8
    Utf8(String),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Io(err) => write!(f, "I/O error: {err}"),
            WriteError::Model(msg) => write!(f, "Invalid API model: {msg}"),
            WriteError::Utf8(msg) => write!(f, "Output is not UTF-8: {msg}"),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for WriteError {
    fn from(err: io::Error) -> Self {
        WriteError::Io(err)
    }
}
