// src/error.rs
use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a path was rejected before any filesystem access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPathReason {
    #[error("path required")]
    Required,
    #[error("must be a string")]
    NotUnicode,
    #[error("traversal not allowed")]
    Traversal,
    #[error("invalid characters")]
    InvalidCharacters,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid path: {0}")]
    InvalidPath(InvalidPathReason),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file has no extension: {}", .0.display())]
    NoExtension(PathBuf),

    #[error("file has no name: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compute file age: {0}")]
    AgeComputation(#[source] Box<Error>),
}

impl Error {
    pub(crate) fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Stat { path: path.into(), source }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read { path: path.into(), source }
    }

    /// True for failures caused by the path not resolving to anything.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::AgeComputation(inner) => inner.is_not_found(),
            _ => false,
        }
    }
}

impl From<InvalidPathReason> for Error {
    fn from(reason: InvalidPathReason) -> Self {
        Error::InvalidPath(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = Error::NotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "file not found: missing.txt");

        let err = Error::from(InvalidPathReason::Traversal);
        assert_eq!(err.to_string(), "invalid path: traversal not allowed");
    }

    #[test]
    fn test_age_error_wraps_source() {
        let inner = Error::NotFound(PathBuf::from("gone.log"));
        let err = Error::AgeComputation(Box::new(inner));
        assert_eq!(err.to_string(), "failed to compute file age: file not found: gone.log");
        assert!(err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }
}
