//! Key bindings for the countdown component.

use super::types::Control;
use crate::key::{self, Binding};
use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Keyboard equivalents of the three controls.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Same as clicking `-`.
    pub decrement: Binding,
    /// Same as clicking `+`.
    pub increment: Binding,
    /// Same as clicking `Start`.
    pub start: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            decrement: Binding::new(vec![KeyCode::Char('-'), KeyCode::Left, KeyCode::Down])
                .with_help("-", "less"),
            increment: Binding::new(vec![
                KeyCode::Char('+'),
                KeyCode::Char('='),
                KeyCode::Right,
                KeyCode::Up,
            ])
            .with_help("+", "more"),
            start: Binding::new(vec![KeyCode::Enter, KeyCode::Char('s')])
                .with_help("enter", "start"),
        }
    }
}

impl KeyMap {
    /// Returns the control bound to `key_msg`, if any.
    pub fn control_for(&self, key_msg: &KeyMsg) -> Option<Control> {
        if self.decrement.matches(key_msg) {
            Some(Control::Decrement)
        } else if self.increment.matches(key_msg) {
            Some(Control::Increment)
        } else if self.start.matches(key_msg) {
            Some(Control::Start)
        } else {
            None
        }
    }

    /// Enables or disables every binding at once.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.decrement.set_enabled(enabled);
        self.increment.set_enabled(enabled);
        self.start.set_enabled(enabled);
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.decrement, &self.increment, &self.start]
    }
}
