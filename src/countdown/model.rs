//! The countdown controller.

use super::keymap::KeyMap;
use super::layout::{self, Elements};
use super::options::{config_from, Config, CountdownOption};
use super::types::{ClickMsg, Control, FinishedMsg, Phase, Session, State};
use crate::clock::Clock;
use crate::dom::{Document, Event, Surface, Tag};
use crate::format::format_time;
use crate::key;
use crate::ticker::{Registry, TickMsg};
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A minute-based countdown widget.
///
/// The widget is either idle, showing the minute counter with `-`, `+` and
/// `Start` controls, or running, showing the remaining time as `MM:SS` with
/// the controls hidden. When the time runs out it returns to idle with the
/// counter untouched, ready to start again.
///
/// ```rust
/// use countdown_widget::countdown::{new, Phase};
///
/// let mut countdown = new(&[]);
/// countdown.increment();
/// countdown.increment();
/// assert_eq!(countdown.display_text(), "2");
///
/// let _tick = countdown.start();
/// assert_eq!(countdown.phase(), Phase::Running);
/// assert_eq!(countdown.display_text(), "02:00");
/// assert!(!countdown.controls_visible());
/// ```
#[derive(Debug)]
pub struct Model {
    /// Key bindings. Disabled automatically while running.
    pub keymap: KeyMap,

    id: i64,
    pub(super) counter: u64,
    pub(super) state: State,
    interval: Duration,
    clock: Arc<dyn Clock>,
    ticks: Registry,
    document: Document<Control>,
    elements: Elements,
    focus: bool,
}

/// Creates a countdown in its own document.
///
/// The document gets a container carrying the configured mount id, so the
/// widget is always attached.
pub fn new(opts: &[CountdownOption]) -> Model {
    let config = config_from(opts);
    let mut document = Document::new();
    document.create_with_id(Tag::Container, config.mount_id.clone());
    Model::from_config(document, config)
}

/// Creates a countdown inside an existing document.
///
/// The widget looks up its container by the configured mount id. If the
/// document has no such element the widget still works, it just renders
/// nothing.
pub fn mount(document: Document<Control>, opts: &[CountdownOption]) -> Model {
    Model::from_config(document, config_from(opts))
}

impl Model {
    fn from_config(mut document: Document<Control>, config: Config) -> Self {
        let container = document.get_element_by_id(&config.mount_id);
        if container.is_none() {
            log::debug!(
                "countdown: no element with id {:?}, rendering detached",
                config.mount_id
            );
        }
        let elements = layout::build(&mut document, container, &config);

        let mut model = Self {
            keymap: config.keymap,
            id: next_id(),
            counter: 0,
            state: State::Idle,
            interval: config.interval,
            clock: config.clock,
            ticks: Registry::new(),
            document,
            elements,
            focus: false,
        };
        model.show_counter();
        model
    }

    /// Unique id of this widget, used to route messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Minutes currently selected.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Idle or running.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns true while a countdown is in progress.
    pub fn running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Time left in the current countdown, or `None` when idle.
    pub fn remaining(&self) -> Option<Duration> {
        match &self.state {
            State::Idle => None,
            State::Running(session) => {
                Some(session.end.saturating_duration_since(self.clock.now()))
            }
        }
    }

    /// Interval between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Text of the counter / remaining-time element.
    pub fn display_text(&self) -> &str {
        self.document.text(self.elements.display).unwrap_or_default()
    }

    /// Returns true if all three controls are shown.
    pub fn controls_visible(&self) -> bool {
        self.elements
            .controls()
            .iter()
            .all(|el| self.document.is_visible(*el))
    }

    /// Number of tick sources currently alive for this widget.
    pub fn active_tick_sources(&self) -> usize {
        self.ticks.live()
    }

    /// The element tree the widget renders from.
    pub fn document(&self) -> &Document<Control> {
        &self.document
    }

    /// Handles to the widget's elements.
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Adds a minute. Ignored while running.
    pub fn increment(&mut self) {
        if self.running() {
            log::trace!("countdown {}: increment ignored while running", self.id);
            return;
        }
        self.counter = self.counter.saturating_add(1);
        self.show_counter();
    }

    /// Removes a minute, never going below zero. Ignored while running.
    pub fn decrement(&mut self) {
        if self.running() || self.counter == 0 {
            log::trace!("countdown {}: decrement ignored", self.id);
            return;
        }
        self.counter -= 1;
        self.show_counter();
    }

    /// Starts counting down from the selected number of minutes.
    ///
    /// Returns the first tick command. Does nothing and returns `None` when
    /// the counter is zero or a countdown is already running.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running() {
            log::trace!("countdown {}: start ignored while running", self.id);
            return None;
        }
        if self.counter == 0 {
            log::trace!("countdown {}: start ignored, counter is zero", self.id);
            return None;
        }

        let seconds = self.counter.saturating_mul(60);
        // One extra second so the first tick still shows the full minute count.
        let end = self
            .clock
            .now()
            .checked_add(Duration::from_secs(seconds.saturating_add(1)));
        let Some(end) = end else {
            log::debug!(
                "countdown {}: {} minutes is beyond the clock's range",
                self.id,
                self.counter
            );
            return None;
        };

        self.document
            .set_text(self.elements.display, &format_time(seconds));
        layout::set_controls_visible(&mut self.document, &self.elements, false);
        self.keymap.set_enabled(false);

        let handle = self.ticks.acquire(self.id, self.interval);
        let cmd = handle.schedule();
        self.state = State::Running(Session { end, handle });

        log::debug!(
            "countdown {}: started for {} minute(s)",
            self.id,
            self.counter
        );
        Some(cmd)
    }

    /// Activates a control the way a click would.
    ///
    /// Hidden controls do not react, so clicks during a countdown are
    /// swallowed.
    pub fn click(&mut self, control: Control) -> Option<Cmd> {
        let el = self.elements.control(control);
        match self.document.dispatch(el, Event::Click)? {
            Control::Decrement => {
                self.decrement();
                None
            }
            Control::Increment => {
                self.increment();
                None
            }
            Control::Start => self.start(),
        }
    }

    fn on_tick(&mut self, tick: &TickMsg) -> Option<Cmd> {
        let State::Running(session) = &self.state else {
            log::trace!("countdown {}: tick while idle", self.id);
            return None;
        };
        if !session.handle.owns(tick) {
            log::trace!("countdown {}: stale tick {}", self.id, tick.tag());
            return None;
        }

        let remaining = session
            .end
            .saturating_duration_since(self.clock.now())
            .as_secs();
        let next = (remaining > 0).then(|| session.handle.schedule());
        self.document
            .set_text(self.elements.display, &format_time(remaining));

        match next {
            Some(cmd) => Some(cmd),
            None => Some(self.finish()),
        }
    }

    // Running -> Idle. Replacing the state drops the session and with it the
    // tick handle.
    fn finish(&mut self) -> Cmd {
        self.state = State::Idle;
        self.show_counter();
        layout::set_controls_visible(&mut self.document, &self.elements, true);
        self.keymap.set_enabled(true);

        log::debug!("countdown {}: finished", self.id);

        let id = self.id;
        let minutes = self.counter;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FinishedMsg { id, minutes }) as Msg
        })
    }

    fn show_counter(&mut self) {
        self.document
            .set_text(self.elements.display, &self.counter.to_string());
    }

    /// Processes a message.
    ///
    /// Handles [`ClickMsg`] addressed to this widget, [`KeyMsg`] while
    /// focused, and its own [`TickMsg`]s. Everything else is ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(click) = msg.downcast_ref::<ClickMsg>() {
            if click.id != 0 && click.id != self.id {
                return None;
            }
            return self.click(click.control);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.focus {
                return None;
            }
            let control = self.keymap.control_for(key_msg)?;
            return self.click(control);
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if tick.id != self.id {
                return None;
            }
            return self.on_tick(tick);
        }

        None
    }

    /// Renders the widget's container. Empty when the widget is detached.
    pub fn view(&self) -> String {
        match self.elements.container {
            Some(container) => self.document.render(container),
            None => String::new(),
        }
    }

    /// One-line key help for the controls currently usable.
    pub fn help_view(&self) -> String {
        let line = key::short_help_line(&key::KeyMap::short_help(&self.keymap));
        if line.is_empty() {
            return line;
        }
        Style::new()
            .foreground(Color::from("241"))
            .render(&line)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(&[]);
        let cmd = model.focus();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
