//! Configurable keyboard mapping
//!
//! This module provides the data-driven binding system that:
//! - Normalizes raw key events into keystrokes (key + exact modifier set)
//! - Compiles `+`-joined chord strings from `key-config.json` once
//! - Resolves keystrokes to actions, grouped into four config categories
//!
//! # Architecture
//!
//! ```text
//! crossterm::KeyEvent → KeyPress → BindingTable::resolve(candidates) → Action
//! ```
//!
//! # Building a table
//!
//! ```ignore
//! let table = BindingTable::build(&config.keyboard);
//! let action = table.resolve(&press.stroke, &[Action::Up, Action::Down]);
//! ```

mod action;
mod binding;
mod chord;
mod crossterm_adapter;
mod defaults;
mod table;
mod types;

pub use action::{Action, ActionCategory};
pub use binding::Keybinding;
pub use chord::{Chord, KeymapError};
pub use crossterm_adapter::{key_press_from_crossterm, modifiers_from_crossterm};
pub use defaults::{
    default_keyboard_config, merge_keyboard_config, unknown_entries, KeyboardConfig,
};
pub use table::{BindingTable, TabDirection};
pub use types::{lowercase_key, KeyCode, KeyPress, Keystroke, Modifiers};
