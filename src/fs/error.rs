//! Errors raised by filesystem operations

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{} is a directory", .0.display())]
    IsDirectory(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} is a binary file", .0.display())]
    BinaryFile(PathBuf),

    #[error("{} is too large ({size_mb:.1} MB, max 2 MB)", .path.display())]
    TooLarge { path: PathBuf, size_mb: f64 },

    #[error("cannot copy {} into itself", .0.display())]
    IntoItself(PathBuf),

    #[error("failed to open {}: {message}", .path.display())]
    Launch { path: PathBuf, message: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path),
            _ => FsError::Io { path, source },
        }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, FsError::AlreadyExists(_))
    }
}

/// Extension for attaching a path to `io::Result`s
pub(crate) trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T, FsError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T, FsError> {
        self.map_err(|e| FsError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_kinds_are_classified() {
        let path = Path::new("/tmp/x");
        assert!(matches!(
            FsError::from_io(path, io::Error::from(io::ErrorKind::NotFound)),
            FsError::NotFound(_)
        ));
        assert!(matches!(
            FsError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied)),
            FsError::PermissionDenied(_)
        ));
        assert!(FsError::from_io(path, io::Error::from(io::ErrorKind::AlreadyExists))
            .is_already_exists());
        assert!(matches!(
            FsError::from_io(path, io::Error::other("boom")),
            FsError::Io { .. }
        ));
    }

    #[test]
    fn test_too_large_message() {
        let err = FsError::TooLarge {
            path: PathBuf::from("big.log"),
            size_mb: 3.0,
        };
        assert_eq!(err.to_string(), "big.log is too large (3.0 MB, max 2 MB)");
    }
}
