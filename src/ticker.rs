//! Cancellable periodic ticks.
//!
//! bubbletea-rs has no long-lived interval timers: a component schedules one
//! tick command at a time and schedules the next one when the tick message
//! comes back. A [`Handle`] represents the right to keep doing that. Every
//! tick it produces carries the owning widget's id and the handle's tag;
//! once the handle is dropped, ticks still in flight no longer match anything
//! and are discarded by the owner.
//!
//! Handles are counted through a shared [`Registry`] so an owner can assert
//! how many tick sources it has alive.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Tags start at 1 so a zero tag never matches a live handle.
static LAST_TAG: AtomicI64 = AtomicI64::new(0);

fn next_tag() -> i64 {
    LAST_TAG.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message sent every time a scheduled tick fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickMsg {
    /// Id of the widget that scheduled the tick.
    pub id: i64,
    tag: i64,
}

impl TickMsg {
    /// Tag of the handle that produced this tick.
    pub fn tag(&self) -> i64 {
        self.tag
    }
}

/// Counts live tick handles for one owner.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    live: Arc<AtomicUsize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles created from this registry that are still alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Acquires a new tick handle for the widget `id`.
    pub fn acquire(&self, id: i64, interval: Duration) -> Handle {
        self.live.fetch_add(1, Ordering::SeqCst);
        Handle {
            id,
            tag: next_tag(),
            interval,
            live: Arc::clone(&self.live),
        }
    }
}

/// A live periodic tick source. Dropping it cancels the source.
#[derive(Debug)]
pub struct Handle {
    id: i64,
    tag: i64,
    interval: Duration,
    live: Arc<AtomicUsize>,
}

impl Handle {
    /// Tag carried by every tick from this handle.
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// Interval between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if `msg` was produced by this handle.
    pub fn owns(&self, msg: &TickMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }

    /// The message every tick from this handle carries.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Builds the command for the next tick, firing after one interval.
    pub fn schedule(&self) -> Cmd {
        let msg = self.tick_msg();
        bubbletea_tick(self.interval, move |_| Box::new(msg.clone()) as Msg)
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_counts_live_handles() {
        let registry = Registry::new();
        assert_eq!(registry.live(), 0);

        let first = registry.acquire(1, Duration::from_secs(1));
        assert_eq!(registry.live(), 1);

        let second = registry.acquire(1, Duration::from_secs(1));
        assert_eq!(registry.live(), 2);

        drop(first);
        assert_eq!(registry.live(), 1);
        drop(second);
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn test_handles_get_distinct_tags() {
        let registry = Registry::new();
        let a = registry.acquire(7, Duration::from_secs(1));
        let b = registry.acquire(7, Duration::from_secs(1));
        assert_ne!(a.tag(), b.tag());
        assert!(a.tag() > 0);
    }

    #[test]
    fn test_owns_checks_id_and_tag() {
        let registry = Registry::new();
        let handle = registry.acquire(3, Duration::from_secs(1));

        assert!(handle.owns(&handle.tick_msg()));
        assert!(!handle.owns(&TickMsg {
            id: 4,
            tag: handle.tag()
        }));
        assert!(!handle.owns(&TickMsg {
            id: 3,
            tag: handle.tag() + 1000
        }));
    }

    #[tokio::test]
    async fn test_schedule_delivers_tick_msg() {
        let registry = Registry::new();
        let handle = registry.acquire(11, Duration::from_millis(5));

        let msg = handle.schedule().await.expect("tick should produce a message");
        let tick = msg
            .downcast_ref::<TickMsg>()
            .expect("message should be a TickMsg");
        assert!(handle.owns(tick));
    }
}
