//! Navigation State Machine
//!
//! Resolves key presses through the binding table and drives focus between
//! the search box, drive list and file list, plus movement within the lists.

use std::path::PathBuf;
use std::sync::Arc;

use crate::commands::Cmd;
use crate::keymap::{Action, KeyPress, TabDirection};
use crate::messages::PointerMsg;
use crate::model::{AppModel, Clipboard, ClipboardMode, FocusRegion, StatusMessage};

use super::fs::request_listing;
use super::{prompt, search};

/// Actions the drive list reacts to, in priority order
const DRIVE_ACTIONS: &[Action] = &[
    Action::Up,
    Action::Down,
    Action::Enter,
    Action::Right,
    Action::FocusSearch,
];

/// Actions the file list reacts to, in priority order
const FILE_ACTIONS: &[Action] = &[
    Action::Up,
    Action::Down,
    Action::Enter,
    Action::Backspace,
    Action::Left,
    Action::Open,
    Action::OpenInExplorer,
    Action::Copy,
    Action::Cut,
    Action::Paste,
    Action::Delete,
    Action::SelectAll,
    Action::ClearSelection,
    Action::FocusSearch,
];

/// Handle a key press in whichever region holds focus
pub fn handle_key(model: &mut AppModel, press: KeyPress) -> Option<Cmd> {
    if model.ui.prompt.is_some() {
        return prompt::handle_prompt_key(model, press);
    }

    // Snapshot of the table for this dispatch
    let table = Arc::clone(&model.bindings);
    let region = model.focus.current_region();

    if region == FocusRegion::Search {
        return search::handle_search_key(model, &table, press);
    }

    if let Some(direction) = table.tab_direction(&press.stroke) {
        return Some(cycle_focus(model, direction));
    }

    let candidates = match region {
        FocusRegion::Drives => DRIVE_ACTIONS,
        _ => FILE_ACTIONS,
    };
    let action = table.resolve(&press.stroke, candidates)?;
    tracing::debug!(region = %region, action = %action, "key resolved");

    match region {
        FocusRegion::Drives => drive_action(model, action),
        _ => file_action(model, action),
    }
}

/// Move focus one step around the region cycle
pub(super) fn cycle_focus(model: &mut AppModel, direction: TabDirection) -> Cmd {
    let from = model.focus.current_region();
    let to = match direction {
        TabDirection::Forward => from.next(),
        TabDirection::Backward => from.prev(),
    };

    model.focus.set_region(to);
    if from == FocusRegion::Search && to == FocusRegion::Drives {
        model.focus.reset_index(FocusRegion::Drives, model.drives.len());
    } else {
        model.focus.clamp_to(to, model.list_len(to));
    }
    Cmd::Redraw
}

/// Focus a list region, keeping its (clamped) index
pub(super) fn focus_list(model: &mut AppModel, region: FocusRegion) -> Cmd {
    model.focus.set_region(region);
    model.focus.clamp_to(region, model.list_len(region));
    Cmd::Redraw
}

fn move_index(model: &mut AppModel, region: FocusRegion, delta: isize) -> Cmd {
    let len = model.list_len(region);
    model.focus.move_index(region, delta, len);
    Cmd::Redraw
}

fn drive_action(model: &mut AppModel, action: Action) -> Option<Cmd> {
    match action {
        Action::Up => Some(move_index(model, FocusRegion::Drives, -1)),
        Action::Down => Some(move_index(model, FocusRegion::Drives, 1)),
        Action::Enter => {
            let path = model.focused_drive()?.path.clone();
            Some(request_listing(model, path))
        }
        Action::Right => Some(focus_list(model, FocusRegion::Files)),
        Action::FocusSearch => {
            model.focus.set_region(FocusRegion::Search);
            Some(Cmd::Redraw)
        }
        _ => None,
    }
}

fn file_action(model: &mut AppModel, action: Action) -> Option<Cmd> {
    match action {
        Action::Up => Some(move_index(model, FocusRegion::Files, -1)),
        Action::Down => Some(move_index(model, FocusRegion::Files, 1)),
        Action::Enter => activate_entry(model),
        Action::Backspace => navigate_up(model),
        Action::Left => Some(focus_list(model, FocusRegion::Drives)),
        Action::Open => {
            let path = model.focused_entry()?.path.clone();
            Some(Cmd::OpenFile { path })
        }
        Action::OpenInExplorer => match model.focused_entry() {
            Some(entry) => Some(Cmd::OpenInExplorer {
                path: entry.path.clone(),
            }),
            None => model
                .pane
                .current_dir
                .clone()
                .map(|path| Cmd::OpenFile { path }),
        },
        Action::Copy => Some(stage_clipboard(model, ClipboardMode::Copy)),
        Action::Cut => Some(stage_clipboard(model, ClipboardMode::Cut)),
        Action::Paste => Some(paste(model)),
        Action::Delete => {
            model.set_status(StatusMessage::warning("Delete is not supported"));
            Some(Cmd::Redraw)
        }
        Action::SelectAll => {
            model.pane.select_all();
            Some(Cmd::Redraw)
        }
        Action::ClearSelection => {
            model.pane.clear_selection();
            Some(Cmd::Redraw)
        }
        Action::FocusSearch => {
            model.focus.set_region(FocusRegion::Search);
            Some(Cmd::Redraw)
        }
        _ => None,
    }
}

/// Enter on a file-list item: descend into directories, open files
fn activate_entry(model: &mut AppModel) -> Option<Cmd> {
    let entry = model.focused_entry()?;
    let path = entry.path.clone();
    if entry.is_dir() {
        Some(request_listing(model, path))
    } else {
        Some(Cmd::OpenFile { path })
    }
}

/// List the parent of the current directory; a no-op at a filesystem root
fn navigate_up(model: &mut AppModel) -> Option<Cmd> {
    let current = model.pane.current_dir.as_ref()?;
    let Some(parent) = parent_dir(&current.to_string_lossy()) else {
        tracing::debug!("{} has no parent", current.display());
        return None;
    };
    Some(request_listing(model, PathBuf::from(parent)))
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// `C:` style drive prefix
fn is_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Parent of a directory path, splitting on the last `/` or `\`.
///
/// Returns `None` for filesystem roots (`/`, `C:\`, `C:`) and for bare
/// names without any separator.
pub fn parent_dir(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() || is_drive_prefix(trimmed) {
        return None;
    }

    let sep = trimmed.rfind(is_separator)?;
    let parent = &trimmed[..sep];
    if parent.is_empty() || is_drive_prefix(parent) {
        // Keep the separator: "/home" -> "/", "C:\Users" -> "C:\"
        return Some(trimmed[..=sep].to_string());
    }
    Some(parent.to_string())
}

fn stage_clipboard(model: &mut AppModel, mode: ClipboardMode) -> Cmd {
    let focused = model.focus.current_index(FocusRegion::Files);
    let paths = model.pane.targets(focused);
    if paths.is_empty() {
        model.set_status(StatusMessage::warning("Nothing selected"));
        return Cmd::Redraw;
    }

    let verb = match mode {
        ClipboardMode::Copy => "copied",
        ClipboardMode::Cut => "cut",
    };
    model.set_status(StatusMessage::info(format!(
        "{} item(s) {} to clipboard",
        paths.len(),
        verb
    )));
    model.clipboard = Some(Clipboard { mode, paths });
    Cmd::Redraw
}

fn paste(model: &mut AppModel) -> Cmd {
    let Some(target) = model.pane.current_dir.clone() else {
        model.set_status(StatusMessage::warning("Open a directory to paste into"));
        return Cmd::Redraw;
    };
    let Some(clipboard) = model.clipboard.as_ref().filter(|c| !c.paths.is_empty()) else {
        model.set_status(StatusMessage::warning("Clipboard is empty"));
        return Cmd::Redraw;
    };

    let sources = clipboard.paths.clone();
    let mode = clipboard.mode;
    match mode {
        ClipboardMode::Copy => Cmd::CopyFiles { sources, target },
        ClipboardMode::Cut => {
            model.clipboard = None;
            Cmd::MoveFiles { sources, target }
        }
    }
}

/// Mouse hover and click over the list regions
pub fn handle_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    if model.ui.prompt.is_some() {
        return None;
    }

    match msg {
        PointerMsg::Hover { region, index } => {
            if !region.is_list() {
                return None;
            }
            focus_item(model, region, index);
            Some(Cmd::Redraw)
        }
        PointerMsg::Click {
            region,
            index,
            mods,
        } => {
            if !region.is_list() {
                model.focus.set_region(FocusRegion::Search);
                return Some(Cmd::Redraw);
            }
            focus_item(model, region, index);

            if region == FocusRegion::Files && model.bindings.multi_select_held(mods) {
                if let Some(index) = model.focus.current_index(FocusRegion::Files) {
                    model.pane.toggle_selected(index);
                }
                return Some(Cmd::Redraw);
            }

            let activated = match region {
                FocusRegion::Drives => drive_action(model, Action::Enter),
                _ => file_action(model, Action::Enter),
            };
            activated.or(Some(Cmd::Redraw))
        }
    }
}

fn focus_item(model: &mut AppModel, region: FocusRegion, index: usize) {
    model.focus.set_region(region);
    let len = model.list_len(region);
    model.focus.set_focused_index(region, index, len);
}
