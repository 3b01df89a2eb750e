#![warn(missing_docs)]

//! # countdown-widget
//!
//! A minute-based countdown timer component for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! The user sets a number of minutes with `-` / `+`, presses `Start`, and the
//! widget counts down as `MM:SS` until it reaches zero, then goes back to
//! showing the minute counter. The component follows the Elm Architecture
//! with `init()`, `update()` and `view()`.
//!
//! ## Modules
//!
//! - [`countdown`]: the widget itself (state machine, layout, key bindings)
//! - [`format`]: `MM:SS` formatting
//! - [`dom`]: the element tree the widget lays itself out in
//! - [`ticker`]: cancellable periodic tick commands
//! - [`clock`]: real and manual time sources
//! - [`key`]: key bindings with help text
//!
//! ## Quick Start
//!
//! ```rust
//! use countdown_widget::prelude::*;
//!
//! let mut countdown = countdown_new(&[]);
//! countdown.focus();
//! countdown.click(Control::Increment);
//! assert_eq!(countdown.display_text(), "1");
//! ```
//!
//! Running it full screen:
//!
//! ```rust,ignore
//! use bubbletea_rs::Program;
//! use countdown_widget::Countdown;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let program = Program::<Countdown>::builder().alt_screen(true).build()?;
//!     program.run().await?;
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod countdown;
pub mod dom;
pub mod format;
pub mod key;
pub mod ticker;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component reacts to keyboard input; a blurred one ignores it.
/// Pointer-style messages (such as [`countdown::ClickMsg`]) are delivered
/// regardless of focus.
///
/// ```rust
/// use countdown_widget::prelude::*;
///
/// let mut countdown = countdown_new(&[]);
/// assert!(!countdown.focused());
///
/// countdown.focus();
/// assert!(countdown.focused());
///
/// countdown.blur();
/// assert!(!countdown.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command to run
    /// on focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use countdown::Model as Countdown;
pub use countdown::{
    new as countdown_new, ClickMsg as CountdownClickMsg, Control,
    FinishedMsg as CountdownFinishedMsg, Phase,
};
pub use format::format_time;
pub use ticker::TickMsg as CountdownTickMsg;

/// Prelude module for convenient imports.
///
/// ```rust
/// use countdown_widget::prelude::*;
///
/// let countdown: Countdown = countdown_new(&[with_title("Pasta")]);
/// assert_eq!(countdown.phase(), Phase::Idle);
/// ```
pub mod prelude {
    pub use crate::countdown::{
        mount as countdown_mount, new as countdown_new, with_clock, with_interval, with_keymap,
        with_mount_id, with_prompt, with_start_label, with_styles, with_title,
        ClickMsg as CountdownClickMsg, Control, FinishedMsg as CountdownFinishedMsg,
        KeyMap as CountdownKeyMap, Model as Countdown, Phase, Styles as CountdownStyles,
    };
    pub use crate::format::format_time;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::ticker::TickMsg as CountdownTickMsg;
    pub use crate::Component;
}
