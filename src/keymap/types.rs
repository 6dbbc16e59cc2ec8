//! Core types for the keymap system: Modifiers, KeyCode, Keystroke, KeyPress

use std::fmt;

/// Modifier keys as a bitfield for cheap comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Build from the four independent flags of a raw key event
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= Self::CTRL.0;
        }
        if shift {
            bits |= Self::SHIFT.0;
        }
        if alt {
            bits |= Self::ALT.0;
        }
        if meta {
            bits |= Self::META.0;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & Self::META.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// True when a modifier other than shift is held.
    ///
    /// Such strokes are never treated as text input.
    #[inline]
    pub const fn has_command_modifier(self) -> bool {
        self.ctrl() || self.alt() || self.meta()
    }

    /// Map a config token (`ctrl`, `shift`, ...) to its modifier
    pub fn from_token(token: &str) -> Option<Modifiers> {
        match token {
            "ctrl" | "control" => Some(Modifiers::CTRL),
            "shift" => Some(Modifiers::SHIFT),
            "alt" | "option" | "opt" => Some(Modifiers::ALT),
            "meta" | "cmd" | "command" | "super" | "win" => Some(Modifiers::META),
            _ => None,
        }
    }

    /// Canonical lowercase tokens in ctrl, shift, alt, meta order
    pub fn tokens(self) -> Vec<&'static str> {
        let mut parts = Vec::with_capacity(4);
        if self.ctrl() {
            parts.push("ctrl");
        }
        if self.shift() {
            parts.push("shift");
        }
        if self.alt() {
            parts.push("alt");
        }
        if self.meta() {
            parts.push("meta");
        }
        parts
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join("+"))
    }
}

/// The primary (non-modifier) key of a chord or key event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    /// F1-F24
    F(u8),
}

/// Lower-case a character key.
///
/// Characters whose lower-case form is more than one char (`İ`) are kept
/// as they are, so chord strings and key events agree on them.
pub fn lowercase_key(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl KeyCode {
    /// Parse a key name as found in config strings and browser-style key events.
    ///
    /// Matching is case-insensitive. Returns `None` for names we don't know.
    pub fn from_name(name: &str) -> Option<KeyCode> {
        // " " is what a space bar press reports as its key name
        if name == " " {
            return Some(KeyCode::Space);
        }

        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(KeyCode::Char(lowercase_key(c)));
        }

        let lower = name.to_lowercase();

        let key = match lower.as_str() {
            "enter" | "return" => KeyCode::Enter,
            "escape" | "esc" => KeyCode::Escape,
            "tab" => KeyCode::Tab,
            "backspace" | "back" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "space" | "spacebar" => KeyCode::Space,

            "up" | "arrowup" => KeyCode::Up,
            "down" | "arrowdown" => KeyCode::Down,
            "left" | "arrowleft" => KeyCode::Left,
            "right" | "arrowright" => KeyCode::Right,

            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdown" | "pgdn" => KeyCode::PageDown,
            "insert" | "ins" => KeyCode::Insert,

            other => {
                let n: u8 = other.strip_prefix('f')?.parse().ok()?;
                if (1..=24).contains(&n) {
                    KeyCode::F(n)
                } else {
                    return None;
                }
            }
        };
        Some(key)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Escape => write!(f, "escape"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Delete => write!(f, "delete"),
            KeyCode::Space => write!(f, "space"),
            KeyCode::Up => write!(f, "up"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
            KeyCode::PageUp => write!(f, "pageup"),
            KeyCode::PageDown => write!(f, "pagedown"),
            KeyCode::Insert => write!(f, "insert"),
            KeyCode::F(n) => write!(f, "f{}", n),
        }
    }
}

/// A single normalized key event: a key with the exact set of held modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character key
    pub fn char(c: char) -> Self {
        Self::char_with_mods(c, Modifiers::NONE)
    }

    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        let key = if c == ' ' {
            KeyCode::Space
        } else {
            KeyCode::Char(lowercase_key(c))
        };
        Self { key, mods }
    }

    /// Normalize a raw key event: a key name plus four modifier flags.
    ///
    /// Returns `None` when the key name is unknown; such events never match
    /// any chord.
    pub fn from_key_name(name: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> Option<Self> {
        let key = KeyCode::from_name(name)?;
        Some(Self::new(key, Modifiers::new(ctrl, shift, alt, meta)))
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

/// A key event as delivered by the front end.
///
/// `text` holds the character the key would type (case preserved), which
/// only the search box consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub stroke: Keystroke,
    pub text: Option<char>,
}

impl KeyPress {
    pub const fn new(stroke: Keystroke) -> Self {
        Self { stroke, text: None }
    }

    pub const fn with_text(stroke: Keystroke, text: char) -> Self {
        Self {
            stroke,
            text: Some(text),
        }
    }

    /// A plain character key, as typed
    pub fn typed(c: char) -> Self {
        let mods = if c.is_uppercase() {
            Modifiers::SHIFT
        } else {
            Modifiers::NONE
        };
        Self::with_text(Keystroke::char_with_mods(c, mods), c)
    }

    /// Build from a raw event (key name + modifier flags).
    ///
    /// A single-character key name doubles as the typed text.
    pub fn from_key_name(name: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> Option<Self> {
        let stroke = Keystroke::from_key_name(name, ctrl, shift, alt, meta)?;
        let mut chars = name.chars();
        let text = match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        };
        Some(Self { stroke, text })
    }
}

impl From<Keystroke> for KeyPress {
    fn from(stroke: Keystroke) -> Self {
        Self::new(stroke)
    }
}
