//! Chord specifications: `+`-joined modifier tokens followed by one key
//!
//! A chord is compiled once from its config string and then matched against
//! normalized keystrokes without re-parsing.

use std::fmt;

use thiserror::Error;

use super::types::{KeyCode, Keystroke, Modifiers};

/// Errors from compiling a chord string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("empty chord specification")]
    Empty,
    #[error("empty token in chord '{0}'")]
    EmptyToken(String),
    #[error("unknown key '{key}' in chord '{spec}'")]
    UnknownKey { spec: String, key: String },
    #[error("more than one key in chord '{0}'")]
    MultipleKeys(String),
    #[error("key must be the last token in chord '{0}'")]
    KeyNotLast(String),
}

/// A compiled chord specification.
///
/// `key` is `None` for modifier-only chords such as `"shift"`. Those never
/// match a key event; they only answer [`Chord::is_held`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    pub key: Option<KeyCode>,
    pub mods: Modifiers,
}

impl Chord {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self {
            key: Some(key),
            mods,
        }
    }

    /// Compile a chord string such as `"ctrl+shift+x"`.
    ///
    /// Tokens are case-insensitive. Modifier order is free but the key must
    /// come last.
    pub fn parse(spec: &str) -> Result<Chord, KeymapError> {
        let raw = spec.trim();
        let spec = raw.to_lowercase();
        if raw.is_empty() {
            return Err(KeymapError::Empty);
        }
        // "+" alone (or a trailing "++") names the plus key itself
        if raw == "+" {
            return Ok(Chord::new(KeyCode::Char('+'), Modifiers::NONE));
        }
        let (body, plus_key) = match raw.strip_suffix("++") {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        let mut mods = Modifiers::NONE;
        let mut key = plus_key.then_some(KeyCode::Char('+'));
        let tokens: Vec<&str> = body.split('+').collect();

        for token in tokens.iter().rev() {
            let token = token.trim();
            if token.is_empty() {
                return Err(KeymapError::EmptyToken(spec.clone()));
            }
            if let Some(m) = Modifiers::from_token(&token.to_lowercase()) {
                mods = mods | m;
                continue;
            }
            let code = KeyCode::from_name(token).ok_or_else(|| KeymapError::UnknownKey {
                spec: spec.clone(),
                key: token.to_lowercase(),
            })?;
            match key {
                Some(_) if mods.is_empty() => return Err(KeymapError::MultipleKeys(spec.clone())),
                Some(_) => return Err(KeymapError::KeyNotLast(spec.clone())),
                None if !mods.is_empty() => return Err(KeymapError::KeyNotLast(spec.clone())),
                None => key = Some(code),
            }
        }

        Ok(Chord { key, mods })
    }

    /// Exact match: same key and an identical modifier set
    #[inline]
    pub fn matches(&self, stroke: &Keystroke) -> bool {
        self.key == Some(stroke.key) && self.mods == stroke.mods
    }

    /// True for chords without a primary key (e.g. `"shift"`)
    pub fn is_modifier_only(&self) -> bool {
        self.key.is_none()
    }

    /// Whether every modifier of this chord is held in `mods`.
    ///
    /// Only meaningful for modifier-only chords; a chord with a key is never
    /// "held" by modifiers alone.
    pub fn is_held(&self, mods: Modifiers) -> bool {
        self.key.is_none() && !self.mods.is_empty() && mods.contains(self.mods)
    }

    /// The keystroke this chord matches, if it has a key
    pub fn keystroke(&self) -> Option<Keystroke> {
        self.key.map(|key| Keystroke::new(key, self.mods))
    }
}

impl std::str::FromStr for Chord {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.mods.tokens().into_iter().map(String::from).collect();
        if let Some(key) = self.key {
            parts.push(key.to_string());
        }
        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(key: KeyCode, mods: Modifiers) -> Keystroke {
        Keystroke::new(key, mods)
    }

    #[test]
    fn test_parse_simple_key() {
        let chord = Chord::parse("w").unwrap();
        assert_eq!(chord, Chord::new(KeyCode::Char('w'), Modifiers::NONE));
    }

    #[test]
    fn test_parse_with_modifiers_any_order() {
        let a = Chord::parse("ctrl+shift+x").unwrap();
        let b = Chord::parse("shift+ctrl+x").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.mods, Modifiers::CTRL | Modifiers::SHIFT);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Chord::parse("Ctrl+E").unwrap(), Chord::parse("ctrl+e").unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Chord::parse(""), Err(KeymapError::Empty));
        assert_eq!(Chord::parse("   "), Err(KeymapError::Empty));
        assert!(matches!(Chord::parse("ctrl++x"), Err(KeymapError::EmptyToken(_))));
        assert!(matches!(Chord::parse("ctrl+"), Err(KeymapError::EmptyToken(_))));
        assert!(matches!(Chord::parse("ctrl+bogus"), Err(KeymapError::UnknownKey { .. })));
        assert!(matches!(Chord::parse("a+b"), Err(KeymapError::MultipleKeys(_))));
        assert!(matches!(Chord::parse("x+ctrl"), Err(KeymapError::KeyNotLast(_))));
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(Chord::parse("+").unwrap().key, Some(KeyCode::Char('+')));
        let chord = Chord::parse("ctrl++").unwrap();
        assert_eq!(chord, Chord::new(KeyCode::Char('+'), Modifiers::CTRL));
    }

    #[test]
    fn test_modifier_only_chord() {
        let chord = Chord::parse("shift").unwrap();
        assert!(chord.is_modifier_only());
        assert!(chord.is_held(Modifiers::SHIFT));
        assert!(chord.is_held(Modifiers::SHIFT | Modifiers::CTRL));
        assert!(!chord.is_held(Modifiers::CTRL));
        assert!(!chord.matches(&stroke(KeyCode::Char('a'), Modifiers::SHIFT)));
    }

    #[test]
    fn test_matches_is_exact() {
        let chord = Chord::parse("ctrl+e").unwrap();
        assert!(chord.matches(&stroke(KeyCode::Char('e'), Modifiers::CTRL)));
        assert!(!chord.matches(&stroke(KeyCode::Char('e'), Modifiers::NONE)));
        assert!(!chord.matches(&stroke(
            KeyCode::Char('e'),
            Modifiers::CTRL | Modifiers::SHIFT
        )));
        assert!(!chord.matches(&stroke(KeyCode::Char('f'), Modifiers::CTRL)));
    }

    #[test]
    fn test_space_aliases() {
        let chord = Chord::parse("space").unwrap();
        assert!(chord.matches(&Keystroke::char(' ')));
    }

    #[test]
    fn test_display_is_canonical() {
        let chord = Chord::parse("meta+alt+Shift+ctrl+X").unwrap();
        assert_eq!(chord.to_string(), "ctrl+shift+alt+meta+x");
        assert_eq!(Chord::parse("shift").unwrap().to_string(), "shift");
        assert_eq!(Chord::parse("esc").unwrap().to_string(), "escape");
    }
}
