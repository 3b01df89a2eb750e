//! Construction options for the countdown component.
//!
//! Options follow the functional-options style: each `with_*` function
//! returns a [`CountdownOption`] and [`new`](super::new) applies them in
//! order over the defaults.
//!
//! ```rust
//! use countdown_widget::countdown::{new, with_interval, with_title};
//! use std::time::Duration;
//!
//! let countdown = new(&[
//!     with_title("Tea"),
//!     with_interval(Duration::from_millis(250)),
//! ]);
//! assert_eq!(countdown.interval(), Duration::from_millis(250));
//! ```

use super::keymap::KeyMap;
use crate::clock::{Clock, SystemClock};
use crate::dom::{StyleProp, TextAlign};
use std::sync::Arc;
use std::time::Duration;

/// Id of the container the widget attaches to unless told otherwise.
pub const DEFAULT_MOUNT_ID: &str = "timer";

/// Style profiles for the widget's elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Applied to the mount container.
    pub container: Vec<StyleProp>,
    /// Applied to the row holding `-`, the counter and `+`.
    pub row: Vec<StyleProp>,
    /// Shared by the `-` and `+` buttons.
    pub adjust: Vec<StyleProp>,
    /// Applied to the counter / remaining-time text.
    pub display: Vec<StyleProp>,
    /// Applied to the `Start` button.
    pub start: Vec<StyleProp>,
}

/// The stock look: centered, grey adjust buttons, a green start button.
pub fn default_styles() -> Styles {
    Styles {
        container: vec![StyleProp::TextAlign(TextAlign::Center)],
        row: vec![StyleProp::Margin(1, 0, 1, 0)],
        adjust: vec![
            StyleProp::Padding(0, 1, 0, 1),
            StyleProp::Margin(0, 4, 0, 4),
            StyleProp::Background("240".to_string()),
            StyleProp::Border(false),
        ],
        display: vec![StyleProp::Bold(true)],
        start: vec![
            StyleProp::Bold(true),
            StyleProp::Padding(0, 2, 0, 2),
            StyleProp::Background("#04B575".to_string()),
            StyleProp::Foreground("#FFFDF5".to_string()),
            StyleProp::Border(false),
        ],
    }
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}

/// Everything a countdown needs before it builds its layout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Heading text.
    pub title: String,
    /// Instruction line under the heading.
    pub prompt: String,
    /// Label of the start button.
    pub start_label: String,
    /// Element styles.
    pub styles: Styles,
    /// Time between ticks while running.
    pub interval: Duration,
    /// Source of the current instant.
    pub clock: Arc<dyn Clock>,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Id of the container to attach to.
    pub mount_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Timer".to_string(),
            prompt: "Set the time in minutes".to_string(),
            start_label: "Start".to_string(),
            styles: default_styles(),
            interval: Duration::from_secs(1),
            clock: Arc::new(SystemClock),
            keymap: KeyMap::default(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

/// A single construction option.
#[derive(Debug, Clone)]
pub enum CountdownOption {
    /// See [`with_title`].
    Title(String),
    /// See [`with_prompt`].
    Prompt(String),
    /// See [`with_start_label`].
    StartLabel(String),
    /// See [`with_styles`].
    Styles(Box<Styles>),
    /// See [`with_interval`].
    Interval(Duration),
    /// See [`with_clock`].
    Clock(Arc<dyn Clock>),
    /// See [`with_keymap`].
    KeyMap(Box<KeyMap>),
    /// See [`with_mount_id`].
    MountId(String),
}

impl CountdownOption {
    pub(crate) fn apply(&self, config: &mut Config) {
        match self {
            CountdownOption::Title(title) => config.title = title.clone(),
            CountdownOption::Prompt(prompt) => config.prompt = prompt.clone(),
            CountdownOption::StartLabel(label) => config.start_label = label.clone(),
            CountdownOption::Styles(styles) => config.styles = styles.as_ref().clone(),
            CountdownOption::Interval(interval) => config.interval = *interval,
            CountdownOption::Clock(clock) => config.clock = Arc::clone(clock),
            CountdownOption::KeyMap(keymap) => config.keymap = keymap.as_ref().clone(),
            CountdownOption::MountId(id) => config.mount_id = id.clone(),
        }
    }
}

/// Builds a [`Config`] from defaults and `opts`, later options winning.
pub fn config_from(opts: &[CountdownOption]) -> Config {
    let mut config = Config::default();
    for opt in opts {
        opt.apply(&mut config);
    }
    config
}

/// Sets the heading text.
pub fn with_title(title: impl Into<String>) -> CountdownOption {
    CountdownOption::Title(title.into())
}

/// Sets the instruction line.
pub fn with_prompt(prompt: impl Into<String>) -> CountdownOption {
    CountdownOption::Prompt(prompt.into())
}

/// Sets the start button label.
pub fn with_start_label(label: impl Into<String>) -> CountdownOption {
    CountdownOption::StartLabel(label.into())
}

/// Replaces the element styles.
pub fn with_styles(styles: Styles) -> CountdownOption {
    CountdownOption::Styles(Box::new(styles))
}

/// Sets the tick interval. A zero interval is raised to one millisecond.
pub fn with_interval(interval: Duration) -> CountdownOption {
    CountdownOption::Interval(interval.max(Duration::from_millis(1)))
}

/// Replaces the time source.
pub fn with_clock(clock: impl Clock + 'static) -> CountdownOption {
    CountdownOption::Clock(Arc::new(clock))
}

/// Replaces the key bindings.
pub fn with_keymap(keymap: KeyMap) -> CountdownOption {
    CountdownOption::KeyMap(Box::new(keymap))
}

/// Sets the id of the container to attach to.
pub fn with_mount_id(id: impl Into<String>) -> CountdownOption {
    CountdownOption::MountId(id.into())
}
