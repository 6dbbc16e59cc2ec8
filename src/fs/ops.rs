//! Mutating filesystem operations: batch copy/move, create, open

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::{FsError, IoResultExt};

/// Tally of a batch copy or move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub success_count: usize,
    pub total_count: usize,
}

impl BatchOutcome {
    pub fn failed_count(&self) -> usize {
        self.total_count - self.success_count
    }

    pub fn all_succeeded(&self) -> bool {
        self.success_count == self.total_count
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.success_count, self.total_count)
    }
}

/// Copy each source into `target_dir`, continuing past failures
pub fn copy_files(sources: &[PathBuf], target_dir: &Path) -> BatchOutcome {
    run_batch("copy", sources, target_dir, copy_one)
}

/// Move each source into `target_dir`, continuing past failures
pub fn move_files(sources: &[PathBuf], target_dir: &Path) -> BatchOutcome {
    run_batch("move", sources, target_dir, move_one)
}

fn run_batch(
    verb: &str,
    sources: &[PathBuf],
    target_dir: &Path,
    op: fn(&Path, &Path) -> Result<PathBuf, FsError>,
) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        success_count: 0,
        total_count: sources.len(),
    };

    if let Err(e) = ensure_directory(target_dir) {
        tracing::warn!("Cannot {} into {}: {}", verb, target_dir.display(), e);
        return outcome;
    }

    for source in sources {
        match op(source, target_dir) {
            Ok(dest) => {
                tracing::debug!("{} {} -> {}", verb, source.display(), dest.display());
                outcome.success_count += 1;
            }
            Err(e) => tracing::warn!("Failed to {} {}: {}", verb, source.display(), e),
        }
    }

    outcome
}

fn ensure_directory(path: &Path) -> Result<(), FsError> {
    if fs::metadata(path).at(path)?.is_dir() {
        Ok(())
    } else {
        Err(FsError::NotADirectory(path.to_path_buf()))
    }
}

/// Destination of `source` inside `target_dir`, refusing to overwrite
fn destination(source: &Path, target_dir: &Path) -> Result<PathBuf, FsError> {
    let name = source.file_name().ok_or_else(|| FsError::Io {
        path: source.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let dest = target_dir.join(name);
    if fs::symlink_metadata(&dest).is_ok() {
        if same_file(source, &dest) {
            return Err(FsError::IntoItself(source.to_path_buf()));
        }
        return Err(FsError::AlreadyExists(dest));
    }
    Ok(dest)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Whether `target_dir` is `dir` or lies somewhere below it
fn is_within(target_dir: &Path, dir: &Path) -> bool {
    match (fs::canonicalize(target_dir), fs::canonicalize(dir)) {
        (Ok(target), Ok(dir)) => target.starts_with(dir),
        _ => false,
    }
}

fn copy_one(source: &Path, target_dir: &Path) -> Result<PathBuf, FsError> {
    let metadata = fs::metadata(source).at(source)?;
    let dest = destination(source, target_dir)?;

    if metadata.is_dir() {
        if is_within(target_dir, source) {
            return Err(FsError::IntoItself(source.to_path_buf()));
        }
        copy_dir_all(source, &dest)?;
    } else {
        fs::copy(source, &dest).at(source)?;
    }
    Ok(dest)
}

/// Copy a directory tree using an explicit stack of (from, to) pairs
fn copy_dir_all(source: &Path, dest: &Path) -> Result<(), FsError> {
    let mut pending = vec![(source.to_path_buf(), dest.to_path_buf())];

    while let Some((from, to)) = pending.pop() {
        fs::create_dir(&to).at(&to)?;
        for entry in fs::read_dir(&from).at(&from)? {
            let entry = entry.at(&from)?;
            let child_from = entry.path();
            let child_to = to.join(entry.file_name());
            if fs::metadata(&child_from).at(&child_from)?.is_dir() {
                pending.push((child_from, child_to));
            } else {
                fs::copy(&child_from, &child_to).at(&child_from)?;
            }
        }
    }
    Ok(())
}

fn move_one(source: &Path, target_dir: &Path) -> Result<PathBuf, FsError> {
    let metadata = fs::symlink_metadata(source).at(source)?;
    let dest = destination(source, target_dir)?;

    if metadata.is_dir() && is_within(target_dir, source) {
        return Err(FsError::IntoItself(source.to_path_buf()));
    }

    match fs::rename(source, &dest) {
        Ok(()) => Ok(dest),
        Err(e) if is_cross_device(&e) => {
            tracing::debug!("Cross-device move of {}, copying", source.display());
            copy_one(source, target_dir)?;
            if metadata.is_dir() {
                fs::remove_dir_all(source).at(source)?;
            } else {
                fs::remove_file(source).at(source)?;
            }
            Ok(dest)
        }
        Err(e) => Err(FsError::from_io(source, e)),
    }
}

fn is_cross_device(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::CrossesDevices
}

/// Create an empty file; fails with `AlreadyExists` if anything is at `path`
pub fn create_file(path: &Path) -> Result<(), FsError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .at(path)?;
    tracing::debug!("Created file {}", path.display());
    Ok(())
}

/// Create a directory and any missing parents
pub fn create_directory(path: &Path) -> Result<(), FsError> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(FsError::AlreadyExists(path.to_path_buf()));
    }
    fs::create_dir_all(path).at(path)?;
    tracing::debug!("Created directory {}", path.display());
    Ok(())
}

/// Open a file or directory with the system default handler
pub fn open_path(path: &Path) -> Result<(), FsError> {
    if fs::symlink_metadata(path).is_err() {
        return Err(FsError::NotFound(path.to_path_buf()));
    }
    open::that_detached(path).map_err(|e| FsError::Launch {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Directory to show for "open in explorer": the entry's parent, or the
/// entry itself when it has none
pub fn containing_folder(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(path)
        .to_path_buf()
}

/// Open the folder that contains `path` in the system file browser
pub fn open_in_explorer(path: &Path) -> Result<(), FsError> {
    open_path(&containing_folder(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cross_device_rename_error_is_recognized() {
        assert!(is_cross_device(&io::Error::from(io::ErrorKind::CrossesDevices)));
        assert!(!is_cross_device(&io::Error::from(io::ErrorKind::NotFound)));
        // EXDEV as reported by rename(2)
        #[cfg(any(target_os = "linux", target_os = "macos"))]
        assert!(is_cross_device(&io::Error::from_raw_os_error(18)));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = BatchOutcome {
            success_count: 1,
            total_count: 2,
        };
        assert_eq!(outcome.to_string(), "1 of 2");
        assert_eq!(outcome.failed_count(), 1);
        assert!(!outcome.all_succeeded());
    }

    #[test]
    fn test_outcome_serializes_camel_case() {
        let json = serde_json::to_string(&BatchOutcome {
            success_count: 1,
            total_count: 2,
        })
        .unwrap();
        assert_eq!(json, r#"{"successCount":1,"totalCount":2}"#);
    }

    #[test]
    fn test_copy_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("a.txt"), b"new").unwrap();
        fs::write(dst.join("a.txt"), b"old").unwrap();

        let outcome = copy_files(&[src.join("a.txt")], &dst);
        assert_eq!(outcome.success_count, 0);
        assert_eq!(fs::read(dst.join("a.txt")).unwrap(), b"old");
    }

    #[test]
    fn test_copy_onto_itself_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            copy_one(&file, dir.path()),
            Err(FsError::IntoItself(_))
        ));
    }

    #[test]
    fn test_copy_directory_into_own_subtree_fails() {
        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        assert!(matches!(
            copy_one(&parent, &child),
            Err(FsError::IntoItself(_))
        ));
    }

    #[test]
    fn test_containing_folder() {
        assert_eq!(
            containing_folder(Path::new("/home/user/a.txt")),
            PathBuf::from("/home/user")
        );
        assert_eq!(containing_folder(Path::new("a.txt")), PathBuf::from("a.txt"));
    }

    #[test]
    fn test_open_missing_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            open_path(&dir.path().join("nope")),
            Err(FsError::NotFound(_))
        ));
    }
}
