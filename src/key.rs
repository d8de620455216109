//! Key bindings with help text, ported in spirit from the Go `bubbles/key` package.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the short help shown in the footer. Bindings can be disabled, in
//! which case they never match and are hidden from help views.
//!
//! ```rust
//! use whittle::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
//! let quit = Binding::from_strs(&["ctrl+c"]).with_help("ctrl+c", "force quit");
//! assert!(up.enabled());
//! assert_eq!(quit.help().key, "ctrl+c");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held for the press to match.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press with explicit modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Parses strings such as `"enter"`, `"ctrl+c"`, `"shift+tab"` or `"q"`.
    ///
    /// Returns `None` for names that do not map to a crossterm key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "+" on its own, or a trailing "ctrl++", names the plus key.
        if s.ends_with("++") || s == "+" {
            parts.retain(|p| !p.is_empty());
            parts.push("+");
        }
        let name = parts.pop()?;
        for m in parts {
            match m.to_ascii_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name.to_ascii_lowercase().as_str() {
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => {
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::BackTab
            }
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" | "pageup" => KeyCode::PageUp,
            "pgdown" | "pagedown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(Self { code, modifiers })
    }

    /// Reports whether an incoming key message is this press.
    ///
    /// SHIFT is ignored for character keys and back-tab since terminals fold
    /// it into the key itself (`G` arrives as shift+`G`).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let mut held = msg.modifiers;
        let mut wanted = self.modifiers;
        if matches!(self.code, KeyCode::Char(_) | KeyCode::BackTab) {
            held.remove(KeyModifiers::SHIFT);
            wanted.remove(KeyModifiers::SHIFT);
        }
        held == wanted
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

/// Help text for a binding: the key legend and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key legend, e.g. `"↑/k"`.
    pub key: String,
    /// Short description, e.g. `"up"`.
    pub desc: String,
}

/// A named action bound to one or more key presses.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Creates a binding from key names; names that fail to parse are skipped.
    pub fn from_strs(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().filter_map(|k| KeyPress::parse(k)).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help legend and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses this binding listens for.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Bindings with no keys are never enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Reports whether the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}
