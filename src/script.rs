//! Script sources for the pipeline.
//!
//! The lexer consumes one complete source string, so these helpers collect
//! the whole script up front, from a file or from any reader, and validate
//! the encoding before any lexing begins.

use std::fmt;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// Error while collecting script text.
///
/// Collection either failed to read at all, or read bytes that are not a
/// UTF-8 script. The distinction matters to callers: the first is an
/// environment problem, the second is a problem with the script itself.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Encoding(std::string::FromUtf8Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read script: {e}"),
            LoadError::Encoding(e) => write!(f, "script is not UTF-8: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Encoding(e) => Some(e),
        }
    }
}

impl From<LoadError> for io::Error {
    fn from(value: LoadError) -> Self {
        match value {
            LoadError::Io(e) => e,
            LoadError::Encoding(e) => io::Error::new(ErrorKind::InvalidData, e),
        }
    }
}

/// Read a complete script from a file.
pub fn from_path(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(LoadError::Io)?;
    let text = String::from_utf8(bytes).map_err(LoadError::Encoding)?;
    tracing::debug!(bytes = text.len(), path = %path.display(), "loaded script");
    Ok(text)
}

/// Read a complete script from a reader, to end-of-input.
pub fn from_reader(input: &mut impl Read) -> Result<String, LoadError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes).map_err(LoadError::Io)?;
    let text = String::from_utf8(bytes).map_err(LoadError::Encoding)?;
    tracing::debug!(bytes = text.len(), "loaded script");
    Ok(text)
}
