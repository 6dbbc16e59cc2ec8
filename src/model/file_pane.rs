//! The file list: what it shows, where it is, what is selected

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::commands::RequestId;
use crate::fs::FileEntry;

/// What the file pane is currently displaying
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaneContent {
    /// Nothing loaded yet
    #[default]
    Welcome,
    /// Children of `FilePane::current_dir`
    Directory,
    /// Results of a keyword search
    SearchResults { keyword: String },
}

#[derive(Debug, Clone, Default)]
pub struct FilePane {
    pub content: PaneContent,
    pub entries: Vec<FileEntry>,
    /// Last directory listed successfully; kept while showing search results
    pub current_dir: Option<PathBuf>,
    /// Selected entry paths
    pub selection: BTreeSet<PathBuf>,
    /// Most recent traversal request; results for any other id are stale
    pub pending: Option<RequestId>,
}

impl FilePane {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn show_directory(&mut self, path: PathBuf, entries: Vec<FileEntry>) {
        self.content = PaneContent::Directory;
        self.current_dir = Some(path);
        self.entries = entries;
        self.selection.clear();
    }

    pub fn show_search_results(&mut self, keyword: String, entries: Vec<FileEntry>) {
        self.content = PaneContent::SearchResults { keyword };
        self.entries = entries;
        self.selection.clear();
    }

    /// Whether `request` is the result the pane is waiting for
    pub fn is_current(&self, request: RequestId) -> bool {
        self.pending == Some(request)
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.selection.contains(path)
    }

    /// Toggle one entry in the selection
    pub fn toggle_selected(&mut self, index: usize) {
        let Some(path) = self.entries.get(index).map(|e| e.path.clone()) else {
            return;
        };
        if !self.selection.remove(&path) {
            self.selection.insert(path);
        }
    }

    pub fn select_all(&mut self) {
        self.selection = self.entries.iter().map(|e| e.path.clone()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected paths in list order, or the focused entry when nothing is
    /// selected
    pub fn targets(&self, focused: Option<usize>) -> Vec<PathBuf> {
        if self.selection.is_empty() {
            return focused
                .and_then(|i| self.entries.get(i))
                .map(|e| vec![e.path.clone()])
                .unwrap_or_default();
        }
        self.entries
            .iter()
            .filter(|e| self.selection.contains(&e.path))
            .map(|e| e.path.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::EntryKind;

    fn file(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: PathBuf::from("/data").join(name),
            kind: EntryKind::File,
            size: Some(1),
            modified: None,
        }
    }

    fn pane() -> FilePane {
        let mut pane = FilePane::default();
        pane.show_directory("/data".into(), vec![file("a"), file("b"), file("c")]);
        pane
    }

    #[test]
    fn test_targets_fall_back_to_focused() {
        let pane = pane();
        assert_eq!(pane.targets(Some(1)), vec![PathBuf::from("/data/b")]);
        assert!(pane.targets(None).is_empty());
    }

    #[test]
    fn test_targets_follow_list_order() {
        let mut pane = pane();
        pane.toggle_selected(2);
        pane.toggle_selected(0);
        assert_eq!(
            pane.targets(Some(1)),
            vec![PathBuf::from("/data/a"), PathBuf::from("/data/c")]
        );
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut pane = pane();
        pane.toggle_selected(1);
        pane.toggle_selected(1);
        assert!(pane.selection.is_empty());
    }

    #[test]
    fn test_new_listing_clears_selection() {
        let mut pane = pane();
        pane.select_all();
        assert_eq!(pane.selection.len(), 3);
        pane.show_search_results("a".into(), vec![file("a")]);
        assert!(pane.selection.is_empty());
        assert_eq!(pane.current_dir, Some(PathBuf::from("/data")));
    }
}
