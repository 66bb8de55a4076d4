//! Unified error types for libview
//!
//! Provides a consistent error handling approach across all modules.

use std::path::PathBuf;

/// Unified error type for library operations
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path validation errors
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// Entry missing from the library
    #[error("Entry not found: {0}")]
    NotFound(PathBuf),

    /// No free name could be generated for a copy/move destination
    #[error("No unique name available for {path} after {attempts} attempts")]
    UniqueName { path: PathBuf, attempts: usize },

    /// File watcher errors
    #[error("Watch error: {0}")]
    Watch(String),

    /// System trash failures
    #[error("Trash error: {0}")]
    Trash(String),
}

/// Convenience Result type using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

impl LibraryError {
    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

}

impl From<trash::Error> for LibraryError {
    fn from(err: trash::Error) -> Self {
        Self::Trash(err.to_string())
    }
}

impl From<notify::Error> for LibraryError {
    fn from(err: notify::Error) -> Self {
        Self::Watch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LibraryError::not_found("Textures/wood.png");
        assert_eq!(format!("{}", err), "Entry not found: Textures/wood.png");

        let err = LibraryError::path("/foo/bar", "outside library root");
        assert_eq!(
            format!("{}", err),
            "Path error: /foo/bar - outside library root"
        );
    }

    #[test]
    fn test_unique_name_display() {
        let err = LibraryError::UniqueName {
            path: PathBuf::from("New Folder"),
            attempts: 3,
        };
        assert_eq!(
            format!("{}", err),
            "No unique name available for New Folder after 3 attempts"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LibraryError = io_err.into();
        assert!(matches!(err, LibraryError::Io(_)));
    }
}
