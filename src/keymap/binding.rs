//! Keybinding struct representing one configured action and its chord

use super::action::Action;
use super::chord::{Chord, KeymapError};
use super::types::Keystroke;

/// A single configured binding.
///
/// `spec` keeps the lower-cased config string; `chord` is its compiled form,
/// or `None` when the string could not be parsed. Bindings without a chord are
/// never triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub action: Action,
    pub spec: String,
    pub chord: Option<Chord>,
}

impl Keybinding {
    /// Compile a raw config string for `action`
    pub fn new(action: Action, raw: &str) -> Self {
        let spec = raw.to_lowercase();
        let chord = match Chord::parse(raw) {
            Ok(chord) => Some(chord),
            Err(e) => {
                tracing::warn!(action = %action.qualified_name(), spec = %spec, "Ignoring binding: {}", e);
                None
            }
        };
        Self {
            action,
            spec,
            chord,
        }
    }

    /// Parse error for this binding, if its string is malformed
    pub fn error(&self) -> Option<KeymapError> {
        if self.chord.is_some() {
            return None;
        }
        Chord::parse(&self.spec).err()
    }

    /// Check if this binding matches a keystroke exactly
    pub fn matches(&self, stroke: &Keystroke) -> bool {
        self.chord.is_some_and(|c| c.matches(stroke))
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        match self.chord {
            Some(chord) => chord.to_string(),
            None => self.spec.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_binding_lowercases_spec() {
        let binding = Keybinding::new(Action::OpenInExplorer, "Ctrl+E");
        assert_eq!(binding.spec, "ctrl+e");
        assert!(binding.matches(&Keystroke::new(KeyCode::Char('e'), Modifiers::CTRL)));
    }

    #[test]
    fn test_malformed_binding_never_matches() {
        let binding = Keybinding::new(Action::Copy, "ctrl+");
        assert!(binding.chord.is_none());
        assert!(binding.error().is_some());
        assert!(!binding.matches(&Keystroke::new(KeyCode::Char('c'), Modifiers::CTRL)));
        assert_eq!(binding.display_string(), "ctrl+");
    }
}
