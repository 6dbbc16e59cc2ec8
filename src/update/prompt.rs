//! Name prompt for new files and folders
//!
//! While the prompt is open it receives every key press.

use std::path::{Component, Path};

use crate::commands::Cmd;
use crate::fs::EntryKind;
use crate::keymap::{KeyCode, KeyPress};
use crate::model::{AppModel, StatusMessage};

pub(super) fn handle_prompt_key(model: &mut AppModel, press: KeyPress) -> Option<Cmd> {
    let prompt = model.ui.prompt.as_mut()?;
    let stroke = press.stroke;

    if stroke.mods.is_empty() {
        match stroke.key {
            KeyCode::Escape => {
                model.ui.prompt = None;
                return Some(Cmd::Redraw);
            }
            KeyCode::Enter => {
                let prompt = model.ui.prompt.take()?;
                return create_in_current(model, prompt.kind, &prompt.input);
            }
            KeyCode::Backspace => {
                prompt.input.pop();
                return Some(Cmd::Redraw);
            }
            _ => {}
        }
    }

    match press.text {
        Some(ch) if !stroke.mods.has_command_modifier() && !ch.is_control() => {
            prompt.input.push(ch);
            Some(Cmd::Redraw)
        }
        _ => None,
    }
}

/// Create `name` inside the current directory
pub fn create_in_current(model: &mut AppModel, kind: EntryKind, name: &str) -> Option<Cmd> {
    let name = name.trim();
    if name.is_empty() {
        model.set_status(StatusMessage::warning("Name cannot be empty"));
        return Some(Cmd::Redraw);
    }
    if !is_plain_name(name) {
        model.set_status(StatusMessage::warning(format!(
            "\"{}\" is not a valid name",
            name
        )));
        return Some(Cmd::Redraw);
    }
    let Some(dir) = model.pane.current_dir.as_ref() else {
        model.set_status(StatusMessage::warning("Open a directory first"));
        return Some(Cmd::Redraw);
    };

    let path = dir.join(name);
    Some(match kind {
        EntryKind::File => Cmd::CreateFile { path },
        EntryKind::Directory => Cmd::CreateDirectory { path },
    })
}

/// A single path component: no separators, no `.`/`..`, no root or prefix
fn is_plain_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut parts = Path::new(name).components();
    matches!((parts.next(), parts.next()), (Some(Component::Normal(_)), None))
}
