//! fastfm - keyboard-driven two-pane file browser
//!
//! This crate provides the core types and logic for the browser, following
//! the Elm Architecture pattern: an `AppModel`, `Msg`s describing input and
//! results, a pure `update`, and `Cmd`s executed by `Effects`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod effects;
pub mod fs;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use effects::Effects;
pub use messages::Msg;
pub use model::AppModel;
