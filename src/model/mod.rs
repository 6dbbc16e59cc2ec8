//! Application model - the complete state of the file browser session
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! The model is owned by the event loop and mutated only by `update`.

pub mod file_pane;
pub mod focus;
pub mod ui;

pub use file_pane::{FilePane, PaneContent};
pub use focus::{FocusRegion, FocusTracker};
pub use ui::{
    Clipboard, ClipboardMode, Preview, Prompt, SearchBox, StatusLevel, StatusMessage, UiState,
};

use std::path::PathBuf;
use std::sync::Arc;

use crate::commands::RequestId;
use crate::config::AppConfig;
use crate::fs::{CancelToken, Drive, FileEntry};
use crate::keymap::BindingTable;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Persisted configuration (key bindings + UI preferences)
    pub config: AppConfig,
    /// Compiled bindings; replaced wholesale when the config changes
    pub bindings: Arc<BindingTable>,
    pub focus: FocusTracker,
    pub drives: Vec<Drive>,
    pub pane: FilePane,
    pub search: SearchBox,
    /// Where keyword searches start
    pub search_root: PathBuf,
    pub clipboard: Option<Clipboard>,
    pub ui: UiState,
    /// Cancels the search currently in flight, if any
    pub search_cancel: Option<CancelToken>,
    last_request: RequestId,
}

impl AppModel {
    pub fn new(config: AppConfig, search_root: PathBuf) -> Self {
        let bindings = Arc::new(BindingTable::build(&config.keyboard));
        Self {
            config,
            bindings,
            focus: FocusTracker::new(),
            drives: Vec::new(),
            pane: FilePane::default(),
            search: SearchBox::default(),
            search_root,
            clipboard: None,
            ui: UiState::default(),
            search_cancel: None,
            last_request: RequestId::default(),
        }
    }

    /// Replace configuration and binding table together
    pub fn apply_config(&mut self, config: AppConfig) {
        let table = BindingTable::build(&config.keyboard);
        if *self.bindings != table {
            tracing::debug!("Binding table rebuilt");
        }
        self.bindings = Arc::new(table);
        self.config = config;
    }

    /// Allocate the id for a new traversal and make it the one the pane waits for
    pub fn next_request(&mut self) -> RequestId {
        self.last_request = self.last_request.next();
        self.pane.pending = Some(self.last_request);
        self.last_request
    }

    /// Length of a list region
    pub fn list_len(&self, region: FocusRegion) -> usize {
        match region {
            FocusRegion::Search => 0,
            FocusRegion::Drives => self.drives.len(),
            FocusRegion::Files => self.pane.len(),
        }
    }

    pub fn focused_drive(&self) -> Option<&Drive> {
        self.focus
            .current_index(FocusRegion::Drives)
            .and_then(|i| self.drives.get(i))
    }

    pub fn focused_entry(&self) -> Option<&FileEntry> {
        self.focus
            .current_index(FocusRegion::Files)
            .and_then(|i| self.pane.entry(i))
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.ui.set_status(status);
    }
}
