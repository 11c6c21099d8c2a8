use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for whitespace operations
#[derive(Error, Debug)]
pub enum WhitespaceError {
    #[error("not a file or directory: {}", .path.display())]
    InvalidTarget { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("{0}")]
    Usage(String),
}

impl WhitespaceError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path the error is attached to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidTarget { path } | Self::Io { path, .. } => Some(path),
            Self::InvalidPattern { .. } | Self::Usage(_) => None,
        }
    }
}

/// Result type alias for whitespace operations
pub type WhitespaceResult<T> = Result<T, WhitespaceError>;

/// Attach the offending path to raw I/O results
pub trait PathContext<T> {
    fn at(self, path: &Path) -> WhitespaceResult<T>;
}

impl<T> PathContext<T> for Result<T, io::Error> {
    fn at(self, path: &Path) -> WhitespaceResult<T> {
        self.map_err(|e| WhitespaceError::io(path, e))
    }
}

impl From<walkdir::Error> for WhitespaceError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        Self::io(path, err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = WhitespaceError::InvalidTarget {
            path: PathBuf::from("/dev/null"),
        };

        let display = format!("{}", error);
        assert_eq!(display, "not a file or directory: /dev/null");
    }

    #[test]
    fn test_error_context() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let result: Result<(), io::Error> = Err(io_error);

        let contextualized = result.at(Path::new("missing.txt"));
        let error = contextualized.unwrap_err();

        assert_eq!(error.path(), Some(Path::new("missing.txt")));
        let display = format!("{}", error);
        assert!(display.contains("missing.txt"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_pattern_error() {
        let source = globset::Glob::new("[unclosed").unwrap_err();
        let error = WhitespaceError::InvalidPattern {
            pattern: "[unclosed".to_string(),
            source,
        };

        let display = format!("{}", error);
        assert!(display.contains("invalid exclude pattern"));
        assert!(display.contains("[unclosed"));
        assert!(error.path().is_none());
    }
}
