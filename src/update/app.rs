//! App message handlers (navigation requests, preview, config, quit)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Prompt, StatusMessage};

use super::fs::{reload_current, request_listing};
use super::prompt::create_in_current;

/// Commands to run once at startup: load drives, optionally list `start_dir`
pub fn startup(model: &mut AppModel, start_dir: Option<PathBuf>) -> Cmd {
    let listing = start_dir.map(|dir| request_listing(model, dir));
    Cmd::batch(vec![Cmd::LoadDrives, listing.unwrap_or_default()])
}

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Refresh => {
            let reload = reload_current(model).unwrap_or_default();
            Some(Cmd::batch(vec![Cmd::LoadDrives, reload]))
        }

        AppMsg::TogglePreview => {
            if model.ui.preview.take().is_some() {
                return Some(Cmd::Redraw);
            }
            let entry = model.focused_entry()?;
            if entry.is_dir() {
                model.set_status(StatusMessage::warning("Cannot preview a directory"));
                return Some(Cmd::Redraw);
            }
            Some(Cmd::PreviewFile {
                path: entry.path.clone(),
            })
        }

        AppMsg::ToggleHiddenFiles => {
            let show = !model.config.ui.show_hidden_files;
            model.config.ui.show_hidden_files = show;
            model.set_status(StatusMessage::info(if show {
                "Showing hidden files"
            } else {
                "Hiding hidden files"
            }));
            let save = Cmd::SaveConfig(Box::new(model.config.clone()));
            let reload = reload_current(model).unwrap_or_default();
            Some(Cmd::batch(vec![save, reload]))
        }

        AppMsg::ReloadConfig => Some(Cmd::LoadConfig),
        AppMsg::ResetConfig => Some(Cmd::ResetConfig),

        AppMsg::BeginCreate(kind) => {
            if model.pane.current_dir.is_none() {
                model.set_status(StatusMessage::warning("Open a directory first"));
            } else {
                model.ui.prompt = Some(Prompt::new(kind));
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Create { kind, name } => create_in_current(model, kind, &name),

        AppMsg::Quit => {
            if let Some(cancel) = model.search_cancel.take() {
                cancel.cancel();
            }
            Some(Cmd::Quit)
        }
    }
}
