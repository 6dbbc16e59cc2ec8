//! Configurable actions and the categories they are grouped under

use std::fmt;

/// Config category an action lives under (`keyboard.<category>.<action>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionCategory {
    Navigation,
    FileOperations,
    Selection,
    Search,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 4] = [
        ActionCategory::Navigation,
        ActionCategory::FileOperations,
        ActionCategory::Selection,
        ActionCategory::Search,
    ];

    pub fn config_key(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "navigation",
            ActionCategory::FileOperations => "fileOperations",
            ActionCategory::Selection => "selection",
            ActionCategory::Search => "search",
        }
    }

    pub fn from_config_key(key: &str) -> Option<ActionCategory> {
        Self::ALL.into_iter().find(|c| c.config_key() == key)
    }

    /// Actions belonging to this category, in config order
    pub fn actions(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |a| a.category() == self)
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Every action a user can bind a chord to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Tab,

    // File operations
    Copy,
    Paste,
    Cut,
    Delete,
    Open,
    OpenInExplorer,

    // Selection
    MultiSelect,
    SelectAll,
    ClearSelection,

    // Search
    FocusSearch,
    ClearSearch,
}

impl Action {
    pub const ALL: [Action; 18] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Enter,
        Action::Backspace,
        Action::Tab,
        Action::Copy,
        Action::Paste,
        Action::Cut,
        Action::Delete,
        Action::Open,
        Action::OpenInExplorer,
        Action::MultiSelect,
        Action::SelectAll,
        Action::ClearSelection,
        Action::FocusSearch,
        Action::ClearSearch,
    ];

    pub fn category(self) -> ActionCategory {
        match self {
            Action::Up
            | Action::Down
            | Action::Left
            | Action::Right
            | Action::Enter
            | Action::Backspace
            | Action::Tab => ActionCategory::Navigation,

            Action::Copy
            | Action::Paste
            | Action::Cut
            | Action::Delete
            | Action::Open
            | Action::OpenInExplorer => ActionCategory::FileOperations,

            Action::MultiSelect | Action::SelectAll | Action::ClearSelection => {
                ActionCategory::Selection
            }

            Action::FocusSearch | Action::ClearSearch => ActionCategory::Search,
        }
    }

    /// Key of this action inside its category object
    pub fn config_key(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Enter => "enter",
            Action::Backspace => "backspace",
            Action::Tab => "tab",
            Action::Copy => "copy",
            Action::Paste => "paste",
            Action::Cut => "cut",
            Action::Delete => "delete",
            Action::Open => "open",
            Action::OpenInExplorer => "openInExplorer",
            Action::MultiSelect => "multiSelect",
            Action::SelectAll => "selectAll",
            Action::ClearSelection => "clearSelection",
            Action::FocusSearch => "focusSearch",
            Action::ClearSearch => "clearSearch",
        }
    }

    /// Chord string used when no user configuration exists
    pub fn default_spec(self) -> &'static str {
        match self {
            Action::Up => "w",
            Action::Down => "s",
            Action::Left => "a",
            Action::Right => "d",
            Action::Enter => "enter",
            Action::Backspace => "backspace",
            Action::Tab => "tab",
            Action::Copy => "ctrl+c",
            Action::Paste => "ctrl+v",
            Action::Cut => "ctrl+x",
            Action::Delete => "delete",
            Action::Open => "space",
            Action::OpenInExplorer => "ctrl+e",
            Action::MultiSelect => "shift",
            Action::SelectAll => "ctrl+a",
            Action::ClearSelection => "escape",
            Action::FocusSearch => "ctrl+f",
            Action::ClearSearch => "escape",
        }
    }

    pub fn from_config_key(category: ActionCategory, key: &str) -> Option<Action> {
        category.actions().find(|a| a.config_key() == key)
    }

    /// Dotted path used in messages, e.g. `fileOperations.openInExplorer`
    pub fn qualified_name(self) -> String {
        format!("{}.{}", self.category().config_key(), self.config_key())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_round_trips_through_config_key() {
        for action in Action::ALL {
            assert_eq!(
                Action::from_config_key(action.category(), action.config_key()),
                Some(action)
            );
        }
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(ActionCategory::Navigation.actions().count(), 7);
        assert_eq!(ActionCategory::FileOperations.actions().count(), 6);
        assert_eq!(ActionCategory::Selection.actions().count(), 3);
        assert_eq!(ActionCategory::Search.actions().count(), 2);
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(ActionCategory::from_config_key("editing"), None);
        assert_eq!(Action::from_config_key(ActionCategory::Search, "up"), None);
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            Action::OpenInExplorer.qualified_name(),
            "fileOperations.openInExplorer"
        );
    }
}
