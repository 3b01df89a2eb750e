//! Key bindings with help text.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A set of keys that trigger one action, plus how to describe it.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Keys that activate the binding.
    pub keys: Vec<KeyCode>,
    /// Short key label shown in help, e.g. `"enter"`.
    pub help: String,
    /// What the binding does, e.g. `"start"`.
    pub description: String,
    /// Disabled bindings never match and are left out of help.
    pub enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for `keys` with no help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
            enabled: true,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the binding is enabled and `key_msg` is one of its keys.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.enabled && self.keys.contains(&key_msg.key)
    }
}

/// Anything that can list its bindings for a help line.
pub trait KeyMap {
    /// Bindings to show in the compact help line.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Renders enabled bindings as `help description` pairs separated by ` • `.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled && !b.help.is_empty())
        .map(|b| format!("{} {}", b.help, b.description))
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_listed_keys() {
        let binding = Binding::new(vec![KeyCode::Char('+'), KeyCode::Right]);
        assert!(binding.matches(&key(KeyCode::Char('+'))));
        assert!(binding.matches(&key(KeyCode::Right)));
        assert!(!binding.matches(&key(KeyCode::Left)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]);
        binding.set_enabled(false);
        assert!(!binding.matches(&key(KeyCode::Enter)));
    }

    #[test]
    fn test_short_help_line() {
        let up = Binding::new(vec![KeyCode::Up]).with_help("↑", "more");
        let mut down = Binding::new(vec![KeyCode::Down]).with_help("↓", "less");
        let silent = Binding::new(vec![KeyCode::Esc]);

        assert_eq!(short_help_line(&[&up, &down, &silent]), "↑ more • ↓ less");

        down.set_enabled(false);
        assert_eq!(short_help_line(&[&up, &down]), "↑ more");
    }
}
