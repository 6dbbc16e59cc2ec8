//! Search box key handling
//!
//! The search box consumes its own keys. Only region cycling and the
//! clearSearch chord go through the binding table; Enter and Backspace are
//! the raw keys.

use crate::commands::Cmd;
use crate::fs::CancelToken;
use crate::keymap::{Action, BindingTable, KeyCode, KeyPress};
use crate::model::{AppModel, StatusMessage};

use super::navigation::cycle_focus;

pub(super) fn handle_search_key(
    model: &mut AppModel,
    table: &BindingTable,
    press: KeyPress,
) -> Option<Cmd> {
    let stroke = press.stroke;

    if let Some(direction) = table.tab_direction(&stroke) {
        return Some(cycle_focus(model, direction));
    }

    if stroke.mods.is_empty() {
        match stroke.key {
            KeyCode::Enter => return Some(submit_search(model)),
            KeyCode::Backspace => {
                model.search.backspace();
                return Some(Cmd::Redraw);
            }
            _ => {}
        }
    }

    if table.matches(Action::ClearSearch, &stroke) {
        model.search.clear();
        return Some(Cmd::Redraw);
    }

    match press.text {
        Some(ch) if !stroke.mods.has_command_modifier() && !ch.is_control() => {
            model.search.insert(ch);
            Some(Cmd::Redraw)
        }
        _ => None,
    }
}

/// Start a search for the trimmed query, cancelling any search in flight
pub fn submit_search(model: &mut AppModel) -> Cmd {
    let Some(keyword) = model.search.keyword().map(str::to_owned) else {
        model.set_status(StatusMessage::warning("Enter a search keyword"));
        return Cmd::Redraw;
    };

    if let Some(previous) = model.search_cancel.take() {
        previous.cancel();
    }
    let cancel = CancelToken::new();
    model.search_cancel = Some(cancel.clone());

    let request = model.next_request();
    tracing::debug!(%request, keyword = %keyword, "search requested");
    model.set_status(StatusMessage::info(format!("Searching for \"{}\"...", keyword)));

    Cmd::Search {
        request,
        root: model.search_root.clone(),
        keyword,
        cancel,
    }
}
