//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod config;
mod fs;
mod navigation;
mod prompt;
mod search;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::{startup, update_app};
pub use config::update_config;
pub use fs::{reload_current, request_listing, update_fs};
pub use navigation::{handle_key, handle_pointer, parent_dir};
pub use prompt::create_in_current;
pub use search::submit_search;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Key(press) => navigation::handle_key(model, press),
        Msg::Pointer(m) => navigation::handle_pointer(model, m),
        Msg::Fs(m) => fs::update_fs(model, m),
        Msg::Config(m) => config::update_config(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use tracing::{debug, span, Level};

    // Hover fires on every mouse move
    let is_noisy = matches!(&msg, Msg::Pointer(crate::messages::PointerMsg::Hover { .. }));

    let msg_name = msg.type_name();
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let region_before = model.focus.current_region();
    let result = update_inner(model, msg);
    let region_after = model.focus.current_region();

    if !is_noisy {
        if region_before != region_after {
            debug!(target: "focus", from = %region_before, to = %region_after, "focus changed");
        }
        debug!(target: "message", msg = %msg_name, cmd = ?result.as_ref().map(cmd_name), "processed");
    }

    result
}

#[cfg(debug_assertions)]
fn cmd_name(cmd: &Cmd) -> &'static str {
    match cmd {
        Cmd::None => "None",
        Cmd::Redraw => "Redraw",
        Cmd::Batch(_) => "Batch",
        Cmd::LoadDrives => "LoadDrives",
        Cmd::ListDirectory { .. } => "ListDirectory",
        Cmd::Search { .. } => "Search",
        Cmd::OpenFile { .. } => "OpenFile",
        Cmd::OpenInExplorer { .. } => "OpenInExplorer",
        Cmd::PreviewFile { .. } => "PreviewFile",
        Cmd::CopyFiles { .. } => "CopyFiles",
        Cmd::MoveFiles { .. } => "MoveFiles",
        Cmd::CreateFile { .. } => "CreateFile",
        Cmd::CreateDirectory { .. } => "CreateDirectory",
        Cmd::LoadConfig => "LoadConfig",
        Cmd::SaveConfig(_) => "SaveConfig",
        Cmd::ResetConfig => "ResetConfig",
        Cmd::Quit => "Quit",
    }
}
