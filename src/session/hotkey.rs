//! Keyboard chord detection for the toolbar toggle hotkey
//!
//! Keys are identified by their physical key code names (`KeyI`, `MetaLeft`,
//! `Digit1`, ...). Modifier keys are never looked up in the pressed-key set:
//! whether Shift/Control/Alt/Meta is held is read from the modifier state that
//! arrives with each event, which avoids ordering races between modifier
//! press/release events on different platforms.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Physical key codes of the default chord (Meta+I)
pub const DEFAULT_HOTKEY: [&str; 2] = ["MetaLeft", "KeyI"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Shift,
    Control,
    Alt,
    Meta,
}

impl Modifier {
    /// Modifier family of a physical key code, side-agnostic
    pub fn from_code(code: &str) -> Option<Modifier> {
        if code.starts_with("Meta") || code.starts_with("Super") || code.starts_with("OS") {
            Some(Modifier::Meta)
        } else if code.starts_with("Control") {
            Some(Modifier::Control)
        } else if code.starts_with("Alt") {
            Some(Modifier::Alt)
        } else if code.starts_with("Shift") {
            Some(Modifier::Shift)
        } else {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            Modifier::Shift => "Shift",
            Modifier::Control => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Meta => "Meta",
        }
    }
}

/// Authoritative "is this modifier currently down" query
pub trait ModifierState {
    fn is_active(&self, modifier: Modifier) -> bool;
}

/// Modifier state captured alongside a keyboard event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldModifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl HeldModifiers {
    pub const NONE: HeldModifiers = HeldModifiers {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }
}

impl ModifierState for HeldModifiers {
    fn is_active(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::Control => self.control,
            Modifier::Alt => self.alt,
            Modifier::Meta => self.meta,
        }
    }
}

/// One required key of a chord
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChordKey {
    Modifier(Modifier),
    Code(String),
}

impl ChordKey {
    pub fn from_code(code: &str) -> ChordKey {
        match Modifier::from_code(code) {
            Some(modifier) => ChordKey::Modifier(modifier),
            None => ChordKey::Code(code.to_string()),
        }
    }

    /// Whether a key event with physical `code` is this key
    fn matches(&self, code: &str) -> bool {
        match self {
            ChordKey::Modifier(modifier) => Modifier::from_code(code) == Some(*modifier),
            ChordKey::Code(expected) => expected == code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHotkeyError {
    #[error("empty hotkey")]
    Empty,
    #[error("unknown key `{0}` in hotkey")]
    UnknownKey(String),
    #[error("hotkey `{0}` has more than one non-modifier key")]
    MultipleKeys(String),
}

/// A set of keys that must be held together
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    keys: Vec<ChordKey>,
}

impl Default for Chord {
    fn default() -> Self {
        Chord::from_codes(DEFAULT_HOTKEY)
    }
}

impl Chord {
    /// Build a chord from physical key codes, dropping duplicates
    pub fn from_codes<I, S>(codes: I) -> Chord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = Vec::new();
        for code in codes {
            let key = ChordKey::from_code(code.as_ref().trim());
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Chord { keys }
    }

    /// Parse a `+`-separated chord string such as `meta+i` or `ctrl+shift+f1`
    pub fn parse(combo: &str) -> Result<Chord, ParseHotkeyError> {
        if combo.trim().is_empty() {
            return Err(ParseHotkeyError::Empty);
        }

        let mut keys = Vec::new();
        let mut has_code = false;
        for token in combo.split('+') {
            let key = parse_token(token)?;
            if let ChordKey::Code(_) = key {
                if has_code {
                    return Err(ParseHotkeyError::MultipleKeys(combo.to_string()));
                }
                has_code = true;
            }
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Ok(Chord { keys })
    }

    pub fn keys(&self) -> &[ChordKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Chord key that an event with physical `code` would press
    pub fn key_for(&self, code: &str) -> Option<&ChordKey> {
        self.keys.iter().find(|key| key.matches(code))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            match key {
                ChordKey::Modifier(modifier) => f.write_str(modifier.name())?,
                ChordKey::Code(code) => {
                    let short = code
                        .strip_prefix("Key")
                        .or_else(|| code.strip_prefix("Digit"))
                        .unwrap_or(code);
                    f.write_str(short)?;
                }
            }
        }
        Ok(())
    }
}

fn parse_token(token: &str) -> Result<ChordKey, ParseHotkeyError> {
    let lower = token.trim().to_ascii_lowercase();
    let modifier = match lower.as_str() {
        "" => return Err(ParseHotkeyError::UnknownKey(token.to_string())),
        "meta" | "cmd" | "command" | "super" | "win" => Some(Modifier::Meta),
        "ctrl" | "control" => Some(Modifier::Control),
        "alt" | "option" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        _ => None,
    };
    if let Some(modifier) = modifier {
        return Ok(ChordKey::Modifier(modifier));
    }

    let mut chars = lower.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_lowercase() {
            return Ok(ChordKey::Code(format!("Key{}", c.to_ascii_uppercase())));
        }
        if c.is_ascii_digit() {
            return Ok(ChordKey::Code(format!("Digit{c}")));
        }
    }

    if let Some(n) = lower.strip_prefix('f')
        && let Ok(n) = n.parse::<u8>()
        && (1..=24).contains(&n)
    {
        return Ok(ChordKey::Code(format!("F{n}")));
    }

    let code = match lower.as_str() {
        "enter" | "return" => "Enter",
        "space" => "Space",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "insert" => "Insert",
        "home" => "Home",
        "end" => "End",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        "up" | "arrowup" => "ArrowUp",
        "down" | "arrowdown" => "ArrowDown",
        "left" | "arrowleft" => "ArrowLeft",
        "right" | "arrowright" => "ArrowRight",
        "/" | "slash" => "Slash",
        "\\" | "backslash" => "Backslash",
        "," | "comma" => "Comma",
        "." | "period" => "Period",
        ";" | "semicolon" => "Semicolon",
        "'" | "quote" => "Quote",
        "`" | "backquote" => "Backquote",
        "-" | "minus" => "Minus",
        "=" | "equal" => "Equal",
        "[" | "bracketleft" => "BracketLeft",
        "]" | "bracketright" => "BracketRight",
        _ => return Err(ParseHotkeyError::UnknownKey(token.trim().to_string())),
    };
    Ok(ChordKey::Code(code.to_string()))
}

/// Hotkey as configured: physical key codes or a chord string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotkeySpec {
    Codes(Vec<String>),
    Combo(String),
}

impl Default for HotkeySpec {
    fn default() -> Self {
        HotkeySpec::Codes(DEFAULT_HOTKEY.iter().map(|code| code.to_string()).collect())
    }
}

impl HotkeySpec {
    /// Resolve to a chord, falling back to the default chord when invalid
    pub fn chord(&self) -> Chord {
        let chord = match self {
            HotkeySpec::Codes(codes) => Ok(Chord::from_codes(codes)),
            HotkeySpec::Combo(combo) => Chord::parse(combo),
        };
        match chord {
            Ok(chord) if !chord.is_empty() => chord,
            Ok(_) => {
                log::warn!("Empty hotkey, using default {}", Chord::default());
                Chord::default()
            }
            Err(err) => {
                log::warn!("Invalid hotkey: {}, using default {}", err, Chord::default());
                Chord::default()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyOptions {
    /// Listen for the hotkey at all
    pub enabled: bool,
    /// Also fire while a focused widget (e.g. a text input) consumes key presses
    pub enable_in_text_input: bool,
}

impl Default for HotkeyOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_in_text_input: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Some other chord key was not held; the press was not recorded
    Ignored,
    /// The press was recorded without completing the chord
    Recorded,
    /// The press completed the chord
    Triggered,
}

/// Tracks held keys and reports when the configured chord is completed
#[derive(Debug, Clone)]
pub struct ChordDetector {
    chord: Chord,
    pressed: HashSet<String>,
}

impl ChordDetector {
    pub fn new(chord: Chord) -> Self {
        Self {
            chord,
            pressed: HashSet::new(),
        }
    }

    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed.contains(code)
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
    }

    fn is_satisfied(&self, key: &ChordKey, modifiers: &impl ModifierState) -> bool {
        match key {
            ChordKey::Modifier(modifier) => modifiers.is_active(*modifier),
            ChordKey::Code(code) => self.pressed.contains(code),
        }
    }

    pub fn key_down(&mut self, code: &str, modifiers: &impl ModifierState) -> KeyOutcome {
        let this_key = self.chord.key_for(code);
        let others_held = self
            .chord
            .keys()
            .iter()
            .filter(|key| Some(*key) != this_key)
            .all(|key| self.is_satisfied(key, modifiers));

        if !others_held {
            return KeyOutcome::Ignored;
        }

        let part_of_chord = this_key.is_some();
        let newly_pressed = self.pressed.insert(code.to_string());

        // Auto-repeat of an already held key is not a new activation
        if part_of_chord && newly_pressed {
            KeyOutcome::Triggered
        } else {
            KeyOutcome::Recorded
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.pressed.remove(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_i() -> ChordDetector {
        ChordDetector::new(Chord::from_codes(["MetaLeft", "KeyI"]))
    }

    #[test]
    fn test_chord_fires_once_with_meta_held() {
        let mut detector = meta_i();
        let meta = HeldModifiers::meta();

        assert_eq!(detector.key_down("MetaLeft", &meta), KeyOutcome::Ignored);
        assert_eq!(detector.key_down("KeyI", &meta), KeyOutcome::Triggered);
        // Auto-repeat while held
        assert_eq!(detector.key_down("KeyI", &meta), KeyOutcome::Recorded);
        assert_eq!(detector.key_down("KeyI", &meta), KeyOutcome::Recorded);
    }

    #[test]
    fn test_release_and_repress_retriggers() {
        let mut detector = meta_i();
        let meta = HeldModifiers::meta();

        for _ in 0..3 {
            assert_eq!(detector.key_down("KeyI", &meta), KeyOutcome::Triggered);
            detector.key_up("KeyI");
            assert!(!detector.is_pressed("KeyI"));
        }
    }

    #[test]
    fn test_key_alone_never_triggers() {
        let mut detector = meta_i();
        assert_eq!(
            detector.key_down("KeyI", &HeldModifiers::NONE),
            KeyOutcome::Ignored
        );
        assert!(!detector.is_pressed("KeyI"));

        // Meta pressed afterwards does not complete a chord that was never recorded
        assert_eq!(
            detector.key_down("MetaLeft", &HeldModifiers::meta()),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_modifier_read_from_event_state_not_pressed_set() {
        let mut detector = meta_i();
        // Meta key-down was never seen, but the event reports it held
        assert_eq!(
            detector.key_down("KeyI", &HeldModifiers::meta()),
            KeyOutcome::Triggered
        );
    }

    #[test]
    fn test_unrelated_key_does_not_trigger() {
        let mut detector = meta_i();
        let meta = HeldModifiers::meta();
        assert_eq!(detector.key_down("KeyI", &meta), KeyOutcome::Triggered);
        assert_eq!(detector.key_down("KeyJ", &meta), KeyOutcome::Recorded);
    }

    #[test]
    fn test_right_side_modifier_satisfies_chord() {
        let chord = Chord::from_codes(["KeyI", "ShiftLeft"]);
        let mut detector = ChordDetector::new(chord);
        let shift = HeldModifiers {
            shift: true,
            ..HeldModifiers::NONE
        };
        assert_eq!(detector.key_down("KeyI", &shift), KeyOutcome::Triggered);
    }

    #[test]
    fn test_parse_combo() {
        let chord = Chord::parse("meta+i").unwrap();
        assert_eq!(
            chord.keys(),
            &[
                ChordKey::Modifier(Modifier::Meta),
                ChordKey::Code("KeyI".to_string())
            ]
        );

        let chord = Chord::parse("Ctrl + Shift + F12").unwrap();
        assert_eq!(
            chord.keys(),
            &[
                ChordKey::Modifier(Modifier::Control),
                ChordKey::Modifier(Modifier::Shift),
                ChordKey::Code("F12".to_string())
            ]
        );

        assert_eq!(
            Chord::parse("alt+/").unwrap().keys()[1],
            ChordKey::Code("Slash".to_string())
        );
        assert_eq!(
            Chord::parse("cmd+1").unwrap().keys()[1],
            ChordKey::Code("Digit1".to_string())
        );
    }

    #[test]
    fn test_parse_combo_errors() {
        assert_eq!(Chord::parse("  "), Err(ParseHotkeyError::Empty));
        assert_eq!(
            Chord::parse("meta+banana"),
            Err(ParseHotkeyError::UnknownKey("banana".to_string()))
        );
        assert_eq!(
            Chord::parse("meta+"),
            Err(ParseHotkeyError::UnknownKey(String::new()))
        );
        assert_eq!(
            Chord::parse("a+b"),
            Err(ParseHotkeyError::MultipleKeys("a+b".to_string()))
        );
    }

    #[test]
    fn test_invalid_hotkey_falls_back_to_default_chord() {
        assert_eq!(
            HotkeySpec::Combo("meta+banana".to_string()).chord(),
            Chord::default()
        );
        assert_eq!(HotkeySpec::Codes(Vec::new()).chord(), Chord::default());
        assert_eq!(HotkeySpec::default().chord(), Chord::default());
        assert_eq!(
            HotkeySpec::Combo("meta+i".to_string()).chord(),
            Chord::default()
        );
    }

    #[test]
    fn test_hotkey_deserializes_codes_or_combo() {
        let codes: HotkeySpec = serde_json::from_str(r#"["ControlLeft", "KeyK"]"#).unwrap();
        assert_eq!(
            codes,
            HotkeySpec::Codes(vec!["ControlLeft".to_string(), "KeyK".to_string()])
        );
        let combo: HotkeySpec = serde_json::from_str(r#""ctrl+k""#).unwrap();
        assert_eq!(combo, HotkeySpec::Combo("ctrl+k".to_string()));
    }

    #[test]
    fn test_chord_display() {
        assert_eq!(Chord::default().to_string(), "Meta+I");
        assert_eq!(Chord::parse("ctrl+shift+1").unwrap().to_string(), "Ctrl+Shift+1");
    }
}
