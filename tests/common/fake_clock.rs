//! Deterministic clock for wait-loop tests: manual time, counted sleeps.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use vigil::clock::Clock;

/// Clock whose time only moves when a sleep or an explicit `advance`
/// moves it. Records every sleep so tests can assert on attempt pacing.
pub struct FakeClock {
    inner: Mutex<State>,
}

struct State {
    now: Instant,
    /// When false, sleeps are recorded but time stands still; the probe
    /// under test drives the clock itself via `advance`.
    advance_on_sleep: bool,
    sleeps: Vec<Duration>,
}

impl FakeClock {
    /// Virtual time: each sleep advances the clock by the slept interval.
    pub fn new() -> Self {
        Self::with_advance_on_sleep(true)
    }

    /// Sleeps are recorded without moving time; tests advance the clock
    /// explicitly (e.g. from inside the probe).
    pub fn frozen_sleeps() -> Self {
        Self::with_advance_on_sleep(false)
    }

    fn with_advance_on_sleep(advance_on_sleep: bool) -> Self {
        FakeClock {
            inner: Mutex::new(State {
                now: Instant::now(),
                advance_on_sleep,
                sleeps: Vec::new(),
            }),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.inner.lock().unwrap().now += by;
    }

    pub fn sleep_count(&self) -> usize {
        self.inner.lock().unwrap().sleeps.len()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.inner.lock().unwrap().sleeps.clone()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.inner.lock().unwrap().now
    }

    fn sleep(&self, interval: Duration) {
        let mut state = self.inner.lock().unwrap();
        state.sleeps.push(interval);
        if state.advance_on_sleep {
            state.now += interval;
        }
    }
}
