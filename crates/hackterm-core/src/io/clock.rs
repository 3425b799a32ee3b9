//! Timing collaborator.

use core::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{SecondsFormat, TimeZone, Utc};

/// Source of simulated latency and wall time.
///
/// `delay` is the only suspension point of the core: once awaited it always
/// completes.
#[async_trait(?Send)]
pub trait Clock {
    async fn delay(&self, ms: u64);

    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Uniform random value in `[0, max_ms)`; 0 when `max_ms` is 0.
    fn jitter(&self, max_ms: u64) -> u64;
}

/// Clock that never sleeps. Records requested delays; jitter is always 0.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
    delays: RefCell<Vec<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock frozen at `now` milliseconds since the epoch.
    pub fn at(now: i64) -> Self {
        Self {
            now: Cell::new(now),
            delays: RefCell::new(Vec::new()),
        }
    }

    pub fn set_now(&self, now: i64) {
        self.now.set(now);
    }

    /// Every delay requested so far, in order.
    pub fn delays(&self) -> Vec<u64> {
        self.delays.borrow().clone()
    }

    pub fn total_delay(&self) -> u64 {
        self.delays.borrow().iter().sum()
    }
}

#[async_trait(?Send)]
impl Clock for ManualClock {
    async fn delay(&self, ms: u64) {
        self.delays.borrow_mut().push(ms);
    }

    fn now_millis(&self) -> i64 {
        self.now.get()
    }

    fn jitter(&self, _max_ms: u64) -> u64 {
        0
    }
}

/// `2024-01-01T00:00:00.000Z` style UTC timestamp.
pub fn iso_timestamp(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(time) => time.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => millis.to_string(),
    }
}
