//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use fastfm::commands::Cmd;
use fastfm::config::AppConfig;
use fastfm::fs::{Drive, EntryKind, FileEntry};
use fastfm::keymap::{Chord, KeyPress};
use fastfm::messages::{FsMsg, Msg};
use fastfm::model::AppModel;
use fastfm::update::update;

pub fn file(dir: &str, name: &str) -> FileEntry {
    entry(dir, name, EntryKind::File)
}

pub fn dir(dir: &str, name: &str) -> FileEntry {
    entry(dir, name, EntryKind::Directory)
}

fn entry(parent: &str, name: &str, kind: EntryKind) -> FileEntry {
    FileEntry {
        name: name.to_string(),
        path: Path::new(parent).join(name),
        kind,
        size: (kind == EntryKind::File).then_some(10),
        modified: None,
    }
}

/// Model with two drives and `/data` listed: `docs/`, `src/`, `a.txt`, `b.txt`
pub fn test_model() -> AppModel {
    test_model_with_config(AppConfig::default())
}

pub fn test_model_with_config(config: AppConfig) -> AppModel {
    let mut model = AppModel::new(config, PathBuf::from("/home/user"));
    update(
        &mut model,
        Msg::Fs(FsMsg::DrivesLoaded(vec![
            Drive::new("/", "/"),
            Drive::new("Home", "/home/user"),
        ])),
    );
    list(
        &mut model,
        "/data",
        vec![
            dir("/data", "docs"),
            dir("/data", "src"),
            file("/data", "a.txt"),
            file("/data", "b.txt"),
        ],
    );
    model
}

/// Answer a fresh listing request for `path` with `entries`
pub fn list(model: &mut AppModel, path: &str, entries: Vec<FileEntry>) {
    let request = model.next_request();
    update(
        model,
        Msg::Fs(FsMsg::DirectoryListed {
            request,
            path: PathBuf::from(path),
            result: Ok(entries),
        }),
    );
}

/// A key press by key name with no modifiers
pub fn press(name: &str) -> Msg {
    Msg::Key(KeyPress::from_key_name(name, false, false, false, false).unwrap())
}

/// The key press a chord string describes, e.g. `"ctrl+c"` or `"shift+tab"`
pub fn chord(spec: &str) -> Msg {
    let stroke = Chord::parse(spec).unwrap().keystroke().unwrap();
    Msg::Key(KeyPress::from(stroke))
}

/// Type text into whatever has focus
pub fn type_text(model: &mut AppModel, text: &str) {
    for c in text.chars() {
        update(model, Msg::Key(KeyPress::typed(c)));
    }
}

/// Flatten a command into its leaves (no `None`/`Batch`)
pub fn leaves(cmd: Option<Cmd>) -> Vec<Cmd> {
    match cmd {
        Some(cmd) => cmd.flatten(),
        None => Vec::new(),
    }
}

/// Write `content` to `root/rel`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
