//! Configuration reload handling

use crate::commands::Cmd;
use crate::messages::ConfigMsg;
use crate::model::{AppModel, StatusMessage};

use super::fs::reload_current;

/// Handle configuration messages
pub fn update_config(model: &mut AppModel, msg: ConfigMsg) -> Option<Cmd> {
    match msg {
        ConfigMsg::Loaded(config) => {
            let relist = config.ui.list_options() != model.config.ui.list_options();
            model.apply_config(config);

            let conflicts = model.bindings.conflicts().len();
            let malformed = model.bindings.malformed().count();
            let status = if malformed > 0 {
                StatusMessage::warning(format!(
                    "Configuration loaded, {} malformed binding(s) ignored",
                    malformed
                ))
            } else {
                StatusMessage::info("Configuration loaded")
            };
            if conflicts > 0 {
                tracing::debug!("{} binding conflict(s) in configuration", conflicts);
            }
            model.set_status(status);

            let reload = if relist {
                reload_current(model)
            } else {
                None
            };
            Some(reload.unwrap_or(Cmd::Redraw))
        }

        ConfigMsg::Saved(Ok(path)) => {
            tracing::debug!("Configuration saved to {}", path.display());
            None
        }

        ConfigMsg::Saved(Err(e)) => {
            model.set_status(StatusMessage::error(format!(
                "Failed to save configuration: {}",
                e
            )));
            Some(Cmd::Redraw)
        }
    }
}
