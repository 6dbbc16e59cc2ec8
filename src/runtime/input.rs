//! Terminal event to message mapping
//!
//! A few application keys are fixed and checked before the configurable
//! bindings; everything else becomes `Msg::Key` for the navigation machine.

use crossterm::event::KeyEvent;

use fastfm::fs::EntryKind;
use fastfm::keymap::{key_press_from_crossterm, KeyCode, KeyPress, Keystroke, Modifiers};
use fastfm::messages::{AppMsg, Msg};

/// Application keys that are not part of the key configuration
fn app_key(stroke: &Keystroke) -> Option<AppMsg> {
    let msg = match (stroke.key, stroke.mods) {
        (KeyCode::F(2), Modifiers::NONE) => AppMsg::ToggleHiddenFiles,
        (KeyCode::F(3), Modifiers::NONE) => AppMsg::TogglePreview,
        (KeyCode::F(4), Modifiers::NONE) => AppMsg::ReloadConfig,
        (KeyCode::F(5), Modifiers::NONE) => AppMsg::Refresh,
        (KeyCode::F(7), Modifiers::NONE) => AppMsg::BeginCreate(EntryKind::Directory),
        (KeyCode::F(8), Modifiers::NONE) => AppMsg::BeginCreate(EntryKind::File),
        (KeyCode::Char('q'), Modifiers::CTRL) => AppMsg::Quit,
        _ => return None,
    };
    Some(msg)
}

/// Map a terminal key event to a message
pub fn key_msg(event: &KeyEvent, prompt_open: bool) -> Option<Msg> {
    let press: KeyPress = key_press_from_crossterm(event)?;
    // F-keys would otherwise be swallowed by the name prompt
    if let Some(msg) = app_key(&press.stroke) {
        if !prompt_open || msg == AppMsg::Quit {
            return Some(Msg::App(msg));
        }
    }
    Some(Msg::Key(press))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode as CtKey, KeyModifiers};

    #[test]
    fn test_fixed_keys() {
        let f5 = KeyEvent::new(CtKey::F(5), KeyModifiers::NONE);
        assert!(matches!(key_msg(&f5, false), Some(Msg::App(AppMsg::Refresh))));

        let quit = KeyEvent::new(CtKey::Char('q'), KeyModifiers::CONTROL);
        assert!(matches!(key_msg(&quit, true), Some(Msg::App(AppMsg::Quit))));
    }

    #[test]
    fn test_prompt_receives_fkeys_as_keys() {
        let f7 = KeyEvent::new(CtKey::F(7), KeyModifiers::NONE);
        assert!(matches!(key_msg(&f7, true), Some(Msg::Key(_))));
    }

    #[test]
    fn test_configurable_keys_pass_through() {
        let w = KeyEvent::new(CtKey::Char('w'), KeyModifiers::NONE);
        match key_msg(&w, false) {
            Some(Msg::Key(press)) => assert_eq!(press.stroke, Keystroke::char('w')),
            other => panic!("Expected key message, got {:?}", other),
        }
    }
}
