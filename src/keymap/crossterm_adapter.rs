//! Adapter to convert crossterm key events to our KeyPress type

use crossterm::event::{KeyCode as TermKeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::types::{KeyCode, KeyPress, Keystroke, Modifiers};

/// Map crossterm modifier flags; SUPER and META both count as meta
pub fn modifiers_from_crossterm(mods: KeyModifiers) -> Modifiers {
    Modifiers::new(
        mods.contains(KeyModifiers::CONTROL),
        mods.contains(KeyModifiers::SHIFT),
        mods.contains(KeyModifiers::ALT),
        mods.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    )
}

/// Convert a crossterm key event to a KeyPress
///
/// Returns None for key releases and keys we don't map (media keys, lone
/// modifier presses, ...)
pub fn key_press_from_crossterm(event: &KeyEvent) -> Option<KeyPress> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mut mods = modifiers_from_crossterm(event.modifiers);

    let key = match event.code {
        TermKeyCode::Enter => KeyCode::Enter,
        TermKeyCode::Esc => KeyCode::Escape,
        TermKeyCode::Tab => KeyCode::Tab,
        TermKeyCode::BackTab => {
            mods = mods | Modifiers::SHIFT;
            KeyCode::Tab
        }
        TermKeyCode::Backspace => KeyCode::Backspace,
        TermKeyCode::Delete => KeyCode::Delete,

        TermKeyCode::Up => KeyCode::Up,
        TermKeyCode::Down => KeyCode::Down,
        TermKeyCode::Left => KeyCode::Left,
        TermKeyCode::Right => KeyCode::Right,

        TermKeyCode::Home => KeyCode::Home,
        TermKeyCode::End => KeyCode::End,
        TermKeyCode::PageUp => KeyCode::PageUp,
        TermKeyCode::PageDown => KeyCode::PageDown,
        TermKeyCode::Insert => KeyCode::Insert,

        TermKeyCode::F(n) if (1..=24).contains(&n) => KeyCode::F(n),

        TermKeyCode::Char(c) => {
            // Terminals differ on whether an uppercase letter carries SHIFT
            if c.is_uppercase() {
                mods = mods | Modifiers::SHIFT;
            }
            let stroke = Keystroke::char_with_mods(c, mods);
            return Some(KeyPress::with_text(stroke, c));
        }

        _ => return None,
    };

    Some(KeyPress::new(Keystroke::new(key, mods)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(code: TermKeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn test_plain_char() {
        let press = key_press_from_crossterm(&event(TermKeyCode::Char('w'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(press.stroke, Keystroke::char('w'));
        assert_eq!(press.text, Some('w'));
    }

    #[test]
    fn test_uppercase_char_implies_shift() {
        let press = key_press_from_crossterm(&event(TermKeyCode::Char('W'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(press.stroke, Keystroke::new(KeyCode::Char('w'), Modifiers::SHIFT));
        assert_eq!(press.text, Some('W'));
    }

    #[test]
    fn test_ctrl_char() {
        let press =
            key_press_from_crossterm(&event(TermKeyCode::Char('e'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(press.stroke, Keystroke::new(KeyCode::Char('e'), Modifiers::CTRL));
    }

    #[test]
    fn test_space_maps_to_space_key() {
        let press = key_press_from_crossterm(&event(TermKeyCode::Char(' '), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(press.stroke.key, KeyCode::Space);
        assert_eq!(press.text, Some(' '));
    }

    #[test]
    fn test_back_tab_is_shift_tab() {
        let press =
            key_press_from_crossterm(&event(TermKeyCode::BackTab, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(press.stroke, Keystroke::new(KeyCode::Tab, Modifiers::SHIFT));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut ev = event(TermKeyCode::Enter, KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert!(key_press_from_crossterm(&ev).is_none());
    }

    #[test]
    fn test_unmapped_key() {
        assert!(key_press_from_crossterm(&event(TermKeyCode::Null, KeyModifiers::NONE)).is_none());
    }
}
