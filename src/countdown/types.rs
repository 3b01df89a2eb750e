//! Messages and state types for the countdown component.

use crate::ticker::Handle;
use std::time::Instant;

/// The three clickable controls of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The `-` button.
    Decrement,
    /// The `+` button.
    Increment,
    /// The `Start` button.
    Start,
}

/// Pointer activation of a control.
///
/// An `id` of 0 addresses every countdown; any other value must match
/// [`Model::id`](super::Model::id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickMsg {
    /// Target widget id, or 0 for any.
    pub id: i64,
    /// Which control was clicked.
    pub control: Control,
}

/// Sent once when a countdown reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedMsg {
    /// Id of the widget that finished.
    pub id: i64,
    /// Length of the finished countdown in minutes.
    pub minutes: u64,
}

/// Public view of the controller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counter editable, controls visible.
    Idle,
    /// Countdown in progress, controls hidden.
    Running,
}

/// One countdown run. Dropping it releases its tick source.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) end: Instant,
    pub(crate) handle: Handle,
}

#[derive(Debug)]
pub(crate) enum State {
    Idle,
    Running(Session),
}

impl State {
    pub(crate) fn phase(&self) -> Phase {
        match self {
            State::Idle => Phase::Idle,
            State::Running(_) => Phase::Running,
        }
    }
}
