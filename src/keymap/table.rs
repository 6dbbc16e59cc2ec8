//! BindingTable: the compiled action -> chord mapping used on every key event

use std::collections::{BTreeMap, HashMap};

use super::action::{Action, ActionCategory};
use super::binding::Keybinding;
use super::chord::Chord;
use super::defaults::{default_keyboard_config, KeyboardConfig};
use super::types::{Keystroke, Modifiers};

/// Direction of a region-cycle key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

/// Compiled bindings, built once per configuration.
///
/// Rebuilt in full when the configuration changes; never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindingTable {
    /// Configured actions, ordered by action
    bindings: BTreeMap<Action, Keybinding>,
    /// Fast lookup from keystroke to the actions bound to it
    by_stroke: HashMap<Keystroke, Vec<Action>>,
}

impl BindingTable {
    /// Compile the keyboard section of a config.
    ///
    /// Unknown categories and actions are ignored. Absent ones stay unbound.
    pub fn build(config: &KeyboardConfig) -> Self {
        let mut table = Self::default();

        for category in ActionCategory::ALL {
            let Some(actions) = config.get(category.config_key()) else {
                tracing::debug!(category = %category, "Keyboard category not configured");
                continue;
            };
            for (key, raw) in actions {
                match Action::from_config_key(category, key) {
                    Some(action) => table.insert(Keybinding::new(action, raw)),
                    None => tracing::debug!("Ignoring unknown action {}.{}", category, key),
                }
            }
        }

        table
    }

    /// Table compiled from the shipped defaults
    pub fn with_defaults() -> Self {
        Self::build(&default_keyboard_config())
    }

    fn insert(&mut self, binding: Keybinding) {
        if let Some(stroke) = binding.chord.and_then(|c| c.keystroke()) {
            self.by_stroke.entry(stroke).or_default().push(binding.action);
        }
        self.bindings.insert(binding.action, binding);
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Keybinding> {
        self.bindings.values()
    }

    pub fn binding(&self, action: Action) -> Option<&Keybinding> {
        self.bindings.get(&action)
    }

    pub fn chord(&self, action: Action) -> Option<Chord> {
        self.binding(action).and_then(|b| b.chord)
    }

    /// Whether the action has a usable chord
    pub fn is_bound(&self, action: Action) -> bool {
        self.chord(action).is_some()
    }

    pub fn matches(&self, action: Action, stroke: &Keystroke) -> bool {
        self.chord(action).is_some_and(|c| c.matches(stroke))
    }

    /// All actions bound to exactly this keystroke
    pub fn actions_for(&self, stroke: &Keystroke) -> &[Action] {
        self.by_stroke.get(stroke).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First candidate whose chord matches, in the caller's priority order
    pub fn resolve(&self, stroke: &Keystroke, candidates: &[Action]) -> Option<Action> {
        let bound = self.actions_for(stroke);
        candidates.iter().copied().find(|a| bound.contains(a))
    }

    /// Whether the multi-select modifier chord is held
    pub fn multi_select_held(&self, mods: Modifiers) -> bool {
        self.chord(Action::MultiSelect).is_some_and(|c| c.is_held(mods))
    }

    /// Forward for the tab chord, Backward for the same chord with shift added
    pub fn tab_direction(&self, stroke: &Keystroke) -> Option<TabDirection> {
        let chord = self.chord(Action::Tab)?;
        if chord.matches(stroke) {
            return Some(TabDirection::Forward);
        }
        if chord.mods.contains(Modifiers::SHIFT) {
            return None;
        }
        let reversed = Chord {
            key: chord.key,
            mods: chord.mods | Modifiers::SHIFT,
        };
        reversed.matches(stroke).then_some(TabDirection::Backward)
    }

    /// Get display string for an action's binding
    pub fn display_for(&self, action: Action) -> Option<String> {
        self.binding(action).map(|b| b.display_string())
    }

    /// Pairs of actions that share one chord, in action order
    pub fn conflicts(&self) -> Vec<(Action, Action)> {
        let bound: Vec<(Action, Chord)> = self
            .bindings
            .values()
            .filter_map(|b| b.chord.map(|c| (b.action, c)))
            .collect();

        let mut pairs = Vec::new();
        for (i, (a, chord_a)) in bound.iter().enumerate() {
            for (b, chord_b) in &bound[i + 1..] {
                if chord_a == chord_b {
                    pairs.push((*a, *b));
                }
            }
        }
        pairs
    }

    /// Bindings whose config string failed to compile
    pub fn malformed(&self) -> impl Iterator<Item = &Keybinding> {
        self.bindings.values().filter(|b| b.chord.is_none())
    }
}
