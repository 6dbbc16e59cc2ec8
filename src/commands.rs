//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::fmt;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::fs::{CancelToken, ListOptions};

/// Identifies one traversal request so late results can be recognized.
///
/// Ids increase monotonically per model; the file pane only accepts the
/// result of the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn next(self) -> RequestId {
        RequestId(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // === Filesystem ===
    /// Enumerate drives / volumes for the drive list
    LoadDrives,
    /// List one directory; answered with `FsMsg::DirectoryListed`
    ListDirectory {
        request: RequestId,
        path: PathBuf,
        options: ListOptions,
    },
    /// Recursive search; answered with `FsMsg::SearchCompleted`
    Search {
        request: RequestId,
        root: PathBuf,
        keyword: String,
        cancel: CancelToken,
    },
    /// Open a path with the system handler
    OpenFile { path: PathBuf },
    /// Open the folder containing a path
    OpenInExplorer { path: PathBuf },
    PreviewFile { path: PathBuf },
    CopyFiles { sources: Vec<PathBuf>, target: PathBuf },
    MoveFiles { sources: Vec<PathBuf>, target: PathBuf },
    CreateFile { path: PathBuf },
    CreateDirectory { path: PathBuf },

    // === Configuration ===
    LoadConfig,
    SaveConfig(Box<AppConfig>),
    ResetConfig,

    // === Application Commands ===
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands, flattening trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
            // Everything else changes visible state (pending status, focus)
            _ => true,
        }
    }

    /// Iterate over this command and the leaves of any batch
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => Vec::new(),
            cmd => vec![cmd],
        }
    }
}
