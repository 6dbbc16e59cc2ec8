//! Runtime module - terminal integration
//!
//! - `app` - event loop, command execution and redraw scheduling
//! - `input` - keyboard event to message mapping
//! - `terminal` - raw mode / alternate screen guard

pub mod app;
pub mod input;
pub mod terminal;

pub use app::App;
