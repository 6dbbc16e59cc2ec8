//! Filesystem result handlers
//!
//! Traversal results are matched against the pane's pending request; any
//! other id is a stale result and is dropped (last request wins).

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::{CreateFailure, FsMsg};
use crate::model::{AppModel, FocusRegion, Preview, StatusMessage};

/// Request a listing of `path` for the file pane
pub fn request_listing(model: &mut AppModel, path: PathBuf) -> Cmd {
    // A new traversal supersedes a running search
    if let Some(cancel) = model.search_cancel.take() {
        cancel.cancel();
    }
    let request = model.next_request();
    tracing::debug!(%request, path = %path.display(), "listing requested");
    Cmd::ListDirectory {
        request,
        path,
        options: model.config.ui.list_options(),
    }
}

/// Re-list the current directory, if there is one
pub fn reload_current(model: &mut AppModel) -> Option<Cmd> {
    let path = model.pane.current_dir.clone()?;
    Some(request_listing(model, path))
}

/// Show a fresh list in the pane: index back to the top, drive focus hands over
fn after_listing(model: &mut AppModel) {
    model.focus.reset_index(FocusRegion::Files, model.pane.len());
    if model.focus.current_region() == FocusRegion::Drives {
        model.focus.set_region(FocusRegion::Files);
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Handle filesystem results
pub fn update_fs(model: &mut AppModel, msg: FsMsg) -> Option<Cmd> {
    match msg {
        FsMsg::DrivesLoaded(drives) => {
            model.drives = drives;
            model.focus.clamp_to(FocusRegion::Drives, model.drives.len());
            if model.drives.is_empty() {
                model.set_status(StatusMessage::warning("No drives found"));
            }
            Some(Cmd::Redraw)
        }

        FsMsg::DirectoryListed {
            request,
            path,
            result,
        } => {
            if !model.pane.is_current(request) {
                tracing::debug!(%request, path = %path.display(), "Dropping stale listing");
                return None;
            }
            model.pane.pending = None;

            match result {
                Ok(entries) => {
                    model.pane.show_directory(path, entries);
                    after_listing(model);
                }
                Err(e) => {
                    model.set_status(StatusMessage::error(format!(
                        "Failed to load directory: {}",
                        e
                    )));
                }
            }
            Some(Cmd::Redraw)
        }

        FsMsg::SearchCompleted {
            request,
            keyword,
            result,
        } => {
            if !model.pane.is_current(request) {
                tracing::debug!(%request, keyword = %keyword, "Dropping stale search result");
                return None;
            }
            model.pane.pending = None;
            model.search_cancel = None;

            match result {
                Ok(entries) => {
                    let count = entries.len();
                    model.pane.show_search_results(keyword, entries);
                    after_listing(model);
                    let status = if count == 0 {
                        StatusMessage::info("No matching files")
                    } else {
                        StatusMessage::info(format!("{} file(s) found", count))
                    };
                    model.set_status(status);
                }
                Err(e) => {
                    model.set_status(StatusMessage::error(format!("Search failed: {}", e)));
                }
            }
            Some(Cmd::Redraw)
        }

        FsMsg::Opened { path, result } => match result {
            Ok(()) => {
                tracing::debug!("Opened {}", path.display());
                None
            }
            Err(e) => {
                model.set_status(StatusMessage::error(format!("Failed to open: {}", e)));
                Some(Cmd::Redraw)
            }
        },

        FsMsg::Previewed { path, result } => {
            match result {
                Ok(content) => model.ui.preview = Some(Preview { path, content }),
                Err(e) => {
                    model.ui.preview = None;
                    model.set_status(StatusMessage::error(format!("Cannot preview: {}", e)));
                }
            }
            Some(Cmd::Redraw)
        }

        FsMsg::BatchCompleted { op, outcome } => {
            let text = format!("{} items {}", outcome, op.past_tense());
            let status = if outcome.all_succeeded() {
                StatusMessage::info(text)
            } else {
                StatusMessage::warning(text)
            };
            model.set_status(status);
            reload_current(model).or(Some(Cmd::Redraw))
        }

        FsMsg::Created { path, kind, result } => {
            let name = file_name(&path);
            match result {
                Ok(()) => {
                    tracing::debug!(?kind, "Created {}", path.display());
                    model.set_status(StatusMessage::info(format!("Created {}", path.display())));
                    reload_current(model).or(Some(Cmd::Redraw))
                }
                Err(CreateFailure::AlreadyExists) => {
                    model.set_status(StatusMessage::warning(format!("{} already exists", name)));
                    Some(Cmd::Redraw)
                }
                Err(CreateFailure::Io(e)) => {
                    model.set_status(StatusMessage::error(format!(
                        "Failed to create {}: {}",
                        name, e
                    )));
                    Some(Cmd::Redraw)
                }
            }
        }
    }
}
