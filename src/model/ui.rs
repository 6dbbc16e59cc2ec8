//! UI state - status line, search box, clipboard, preview and name prompt

use std::path::PathBuf;

use crate::fs::EntryKind;

// ============================================================================
// Status line
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

// ============================================================================
// Search box
// ============================================================================

/// Text typed into the search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    pub query: String,
}

impl SearchBox {
    pub fn insert(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// The trimmed keyword, or `None` when there is nothing to search for
    pub fn keyword(&self) -> Option<&str> {
        let keyword = self.query.trim();
        (!keyword.is_empty()).then_some(keyword)
    }
}

// ============================================================================
// Clipboard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Cut,
}

/// Paths staged by copy/cut, waiting for paste
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    pub mode: ClipboardMode,
    pub paths: Vec<PathBuf>,
}

// ============================================================================
// Preview and prompt
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub path: PathBuf,
    pub content: String,
}

/// Name entry for a new file or directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: EntryKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            EntryKind::File => "New file",
            EntryKind::Directory => "New folder",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub status: Option<StatusMessage>,
    pub preview: Option<Preview>,
    pub prompt: Option<Prompt>,
}

impl UiState {
    pub fn set_status(&mut self, status: StatusMessage) {
        match status.level {
            StatusLevel::Error => tracing::warn!("{}", status.text),
            _ => tracing::debug!("status: {}", status.text),
        }
        self.status = Some(status);
    }
}
