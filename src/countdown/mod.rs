//! Countdown timer component for Bubble Tea applications.
//!
//! The user picks a number of minutes with `-` and `+`, presses `Start`, and
//! watches the remaining time count down as `MM:SS`. When it reaches zero the
//! widget goes back to showing the minute counter and the controls come back.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_widget::countdown::{new, Control, Phase};
//!
//! let mut countdown = new(&[]);
//!
//! // Zero minutes: start does nothing.
//! assert!(countdown.start().is_none());
//! assert_eq!(countdown.phase(), Phase::Idle);
//!
//! countdown.click(Control::Increment);
//! let first_tick = countdown.start();
//! assert!(first_tick.is_some());
//! assert_eq!(countdown.display_text(), "01:00");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use countdown_widget::countdown::{self, FinishedMsg};
//! use countdown_widget::Component;
//!
//! struct App {
//!     countdown: countdown::Model,
//!     rounds: u32,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = countdown::new(&[]);
//!         let cmd = countdown.focus();
//!         (Self { countdown, rounds: 0 }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if msg.downcast_ref::<FinishedMsg>().is_some() {
//!             self.rounds += 1;
//!             return None;
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n{}", self.countdown.view(), self.countdown.help_view())
//!     }
//! }
//! ```

pub mod keymap;
pub mod layout;
pub mod model;
pub mod options;
pub mod types;


pub use keymap::KeyMap;
pub use layout::Elements;
pub use model::{mount, new, Model};
pub use options::{
    default_styles, with_clock, with_interval, with_keymap, with_mount_id, with_prompt,
    with_start_label, with_styles, with_title, Config, CountdownOption, Styles,
    DEFAULT_MOUNT_ID,
};
pub use types::{ClickMsg, Control, FinishedMsg, Phase};
