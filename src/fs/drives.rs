//! Drive / volume discovery for the drive list

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A browsable root shown in the drive list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drive {
    pub label: String,
    pub path: PathBuf,
}

impl Drive {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Every existing drive letter `A:\` through `Z:\`
#[cfg(windows)]
pub fn list_drives() -> Vec<Drive> {
    (b'A'..=b'Z')
        .map(|letter| format!("{}:\\", letter as char))
        .filter(|root| Path::new(root).exists())
        .map(|root| Drive::new(root.trim_end_matches('\\'), root))
        .collect()
}

/// Filesystem root, home directory, then mounted volumes
#[cfg(not(windows))]
pub fn list_drives() -> Vec<Drive> {
    let mut drives = vec![Drive::new("/", "/")];

    if let Some(home) = dirs::home_dir() {
        drives.push(Drive::new("Home", home));
    }

    for base in mount_bases() {
        drives.extend(volumes_under(&base));
    }

    drives
}

#[cfg(target_os = "macos")]
fn mount_bases() -> Vec<PathBuf> {
    vec![PathBuf::from("/Volumes")]
}

#[cfg(all(not(windows), not(target_os = "macos")))]
fn mount_bases() -> Vec<PathBuf> {
    let mut bases = Vec::new();
    if let Some(user) = std::env::var_os("USER") {
        bases.push(Path::new("/media").join(&user));
        bases.push(Path::new("/run/media").join(&user));
    }
    bases.push(PathBuf::from("/mnt"));
    bases
}

/// Immediate, non-hidden subdirectories of a mount base, sorted by name
#[cfg_attr(windows, allow(dead_code))]
fn volumes_under(base: &Path) -> Vec<Drive> {
    let Ok(read_dir) = std::fs::read_dir(base) else {
        return Vec::new();
    };

    let mut volumes: Vec<Drive> = read_dir
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            (!super::is_hidden(&name)).then(|| Drive::new(name, entry.path()))
        })
        .collect();
    volumes.sort_by(|a, b| super::compare_names(&a.label, &b.label));
    volumes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_list_is_never_empty() {
        assert!(!list_drives().is_empty());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_root_is_listed_first() {
        assert_eq!(list_drives()[0], Drive::new("/", "/"));
    }

    #[test]
    fn test_volumes_under_skips_hidden_and_files() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("usb")).unwrap();
        std::fs::create_dir(dir.path().join(".trash")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let volumes = volumes_under(dir.path());
        assert_eq!(volumes, vec![Drive::new("usb", dir.path().join("usb"))]);
    }
}
