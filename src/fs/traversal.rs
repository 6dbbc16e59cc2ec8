//! Directory listing and recursive file search

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::entry::{sort_entries, EntryKind, FileEntry, SortBy, SortOrder};
use super::error::{FsError, IoResultExt};

/// How a directory listing is filtered and ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

/// Shared flag used to abort a running search from another thread
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Dot-files and dot-directories are hidden
#[inline]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Where searches start when no root is given: the user's home directory
pub fn default_search_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// List the immediate children of `path`.
///
/// Entries that cannot be stat'ed (broken links, races with deletion) are
/// skipped. Failing to read `path` itself is an error.
pub fn list_directory(path: &Path, options: &ListOptions) -> Result<Vec<FileEntry>, FsError> {
    let metadata = fs::metadata(path).at(path)?;
    if !metadata.is_dir() {
        return Err(FsError::NotADirectory(path.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).at(path)? {
        let Ok(entry) = entry else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.show_hidden && is_hidden(&name) {
            continue;
        }

        let entry_path = entry.path();
        match fs::metadata(&entry_path) {
            Ok(metadata) => entries.push(FileEntry::from_metadata(name, entry_path, &metadata)),
            Err(e) => {
                tracing::debug!("Skipping {}: {}", entry_path.display(), e);
            }
        }
    }

    sort_entries(&mut entries, options.sort_by, options.sort_order);
    Ok(entries)
}

/// Recursive, case-insensitive file-name search under `root`.
///
/// See [`search_with_cancel`].
pub fn search(root: &Path, keyword: &str) -> Result<Vec<FileEntry>, FsError> {
    search_with_cancel(root, keyword, &CancelToken::new())
}

/// Depth-first walk from `root` collecting files whose name contains
/// `keyword` (case-insensitive).
///
/// Hidden entries are skipped along with everything below them. Symbolic
/// links are neither followed nor reported. Unreadable directories and
/// files are skipped without aborting the walk. An empty keyword matches
/// nothing.
pub fn search_with_cancel(
    root: &Path,
    keyword: &str,
    cancel: &CancelToken,
) -> Result<Vec<FileEntry>, FsError> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let mut results = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        if cancel.is_cancelled() {
            tracing::debug!("Search for '{}' cancelled", keyword);
            return Err(FsError::Cancelled);
        }

        let read_dir = match fs::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                tracing::debug!("Skipping unreadable directory {}: {}", dir.display(), e);
                continue;
            }
        };

        let mut subdirs = Vec::new();
        for entry in read_dir.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_hidden(&name) {
                continue;
            }
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                subdirs.push(entry.path());
            } else if file_type.is_file() && name.to_lowercase().contains(&needle) {
                let path = entry.path();
                match entry.metadata() {
                    Ok(metadata) => results.push(FileEntry {
                        name,
                        path,
                        kind: EntryKind::File,
                        size: Some(metadata.len()),
                        modified: metadata.modified().ok(),
                    }),
                    Err(e) => tracing::debug!("Skipping {}: {}", path.display(), e),
                }
            }
        }

        // Reversed so the first subdirectory enumerated is walked first
        pending.extend(subdirs.into_iter().rev());
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_search_cancelled_before_start() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.txt"));
        let token = CancelToken::new();
        token.cancel();
        assert!(matches!(
            search_with_cancel(dir.path(), "a", &token),
            Err(FsError::Cancelled)
        ));
    }

    #[test]
    fn test_empty_keyword_matches_nothing() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.txt"));
        assert!(search(dir.path(), "  ").unwrap().is_empty());
    }

    #[test]
    fn test_list_directory_rejects_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        touch(&file);
        assert!(matches!(
            list_directory(&file, &ListOptions::default()),
            Err(FsError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_list_directory_show_hidden() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join(".env"));
        touch(&dir.path().join("main.rs"));

        let visible = list_directory(dir.path(), &ListOptions::default()).unwrap();
        assert_eq!(visible.len(), 1);

        let options = ListOptions {
            show_hidden: true,
            ..ListOptions::default()
        };
        let all = list_directory(dir.path(), &options).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, ".env");
    }
}
