//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::commands::RequestId;
use crate::config::AppConfig;
use crate::fs::{BatchOutcome, Drive, EntryKind, FileEntry};
use crate::keymap::{KeyPress, Modifiers};
use crate::model::FocusRegion;

/// Mouse input over one of the list regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    /// Pointer moved over an item: focus it, never activate
    Hover { region: FocusRegion, index: usize },
    /// Item clicked: focus it, then activate (or toggle when multi-selecting)
    Click {
        region: FocusRegion,
        index: usize,
        mods: Modifiers,
    },
}

/// Which batch operation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOp {
    Copy,
    Move,
}

impl BatchOp {
    pub fn past_tense(self) -> &'static str {
        match self {
            BatchOp::Copy => "copied",
            BatchOp::Move => "moved",
        }
    }
}

/// Why a create request failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateFailure {
    /// Something already lives at the path
    AlreadyExists,
    /// Any other I/O failure
    Io(String),
}

/// Results posted back by the filesystem executor
#[derive(Debug, Clone)]
pub enum FsMsg {
    DrivesLoaded(Vec<Drive>),
    DirectoryListed {
        request: RequestId,
        path: PathBuf,
        result: Result<Vec<FileEntry>, String>,
    },
    SearchCompleted {
        request: RequestId,
        keyword: String,
        result: Result<Vec<FileEntry>, String>,
    },
    Opened {
        path: PathBuf,
        result: Result<(), String>,
    },
    Previewed {
        path: PathBuf,
        result: Result<String, String>,
    },
    BatchCompleted {
        op: BatchOp,
        outcome: BatchOutcome,
    },
    Created {
        path: PathBuf,
        kind: EntryKind,
        result: Result<(), CreateFailure>,
    },
}

/// Configuration lifecycle messages
#[derive(Debug, Clone)]
pub enum ConfigMsg {
    /// A configuration was loaded (or reset); replaces the binding table
    Loaded(AppConfig),
    /// Result of persisting the configuration
    Saved(Result<PathBuf, String>),
}

/// Application-level messages not bound through the keymap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Reload the current directory
    Refresh,
    /// Toggle the preview of the focused file
    TogglePreview,
    /// Flip `ui.showHiddenFiles`, persist it and reload
    ToggleHiddenFiles,
    /// Re-read the configuration file
    ReloadConfig,
    /// Overwrite the configuration file with defaults
    ResetConfig,
    /// Open the name prompt for a new file or directory
    BeginCreate(EntryKind),
    /// Create an entry in the current directory without prompting
    Create { kind: EntryKind, name: String },
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Key press, resolved against the binding table
    Key(KeyPress),
    /// Mouse hover and click
    Pointer(PointerMsg),
    /// Filesystem results
    Fs(FsMsg),
    /// Configuration load/save results
    Config(ConfigMsg),
    /// App messages (navigation requests, preview, quit)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn key(press: impl Into<KeyPress>) -> Self {
        Msg::Key(press.into())
    }

    pub fn hover(region: FocusRegion, index: usize) -> Self {
        Msg::Pointer(PointerMsg::Hover { region, index })
    }

    pub fn click(region: FocusRegion, index: usize, mods: Modifiers) -> Self {
        Msg::Pointer(PointerMsg::Click {
            region,
            index,
            mods,
        })
    }

    /// Short name used in trace spans
    pub fn type_name(&self) -> &'static str {
        match self {
            Msg::Key(_) => "Key",
            Msg::Pointer(PointerMsg::Hover { .. }) => "Pointer::Hover",
            Msg::Pointer(PointerMsg::Click { .. }) => "Pointer::Click",
            Msg::Fs(FsMsg::DrivesLoaded(_)) => "Fs::DrivesLoaded",
            Msg::Fs(FsMsg::DirectoryListed { .. }) => "Fs::DirectoryListed",
            Msg::Fs(FsMsg::SearchCompleted { .. }) => "Fs::SearchCompleted",
            Msg::Fs(FsMsg::Opened { .. }) => "Fs::Opened",
            Msg::Fs(FsMsg::Previewed { .. }) => "Fs::Previewed",
            Msg::Fs(FsMsg::BatchCompleted { .. }) => "Fs::BatchCompleted",
            Msg::Fs(FsMsg::Created { .. }) => "Fs::Created",
            Msg::Config(ConfigMsg::Loaded(_)) => "Config::Loaded",
            Msg::Config(ConfigMsg::Saved(_)) => "Config::Saved",
            Msg::App(_) => "App",
        }
    }
}
