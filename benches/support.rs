//! Shared helpers for benchmarks

use std::fs;
use std::path::PathBuf;

use fastfm::config::AppConfig;
use fastfm::fs::{Drive, EntryKind, FileEntry};
use fastfm::model::AppModel;
use tempfile::TempDir;

/// A temporary tree `depth` levels deep with `width` subdirectories and
/// `files` files per directory. Every tenth file name contains "report".
#[allow(dead_code)]
pub fn make_tree(depth: usize, width: usize, files: usize) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    let mut pending = vec![(tmp.path().to_path_buf(), 0)];

    while let Some((dir, level)) = pending.pop() {
        for i in 0..files {
            let name = if i % 10 == 0 {
                format!("report-{}.txt", i)
            } else {
                format!("file-{}.dat", i)
            };
            fs::write(dir.join(name), b"x").expect("write file");
        }
        fs::create_dir(dir.join(".git")).expect("create hidden dir");
        if level < depth {
            for i in 0..width {
                let sub = dir.join(format!("dir-{}", i));
                fs::create_dir(&sub).expect("create dir");
                pending.push((sub, level + 1));
            }
        }
    }
    tmp
}

/// Unsorted in-memory entries, dirs and files interleaved
#[allow(dead_code)]
pub fn make_entries(count: usize) -> Vec<FileEntry> {
    (0..count)
        .map(|i| {
            // Scramble the order so the sort has work to do
            let n = (i * 7919) % count.max(1);
            let kind = if n % 3 == 0 {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            FileEntry {
                name: format!("Entry-{:05}", n),
                path: PathBuf::from(format!("/bench/Entry-{:05}", n)),
                kind,
                size: (kind == EntryKind::File).then_some(n as u64),
                modified: None,
            }
        })
        .collect()
}

/// Model with `count` entries listed in `/bench`
#[allow(dead_code)]
pub fn make_model(count: usize) -> AppModel {
    let mut model = AppModel::new(AppConfig::default(), PathBuf::from("/"));
    model.drives = vec![Drive::new("/", "/")];
    model
        .pane
        .show_directory(PathBuf::from("/bench"), make_entries(count));
    model
}
