//! Fluent entry point: configure a wait, then block until the probe is
//! ready.

use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::control::AbortToken;

use super::classify::{Classify, FailureKind};
use super::error::WaitError;
use super::policy::WaitConfig;
use super::probe::Probe;
use super::run::run_until;

/// Builder for a single blocking wait.
///
/// Collects timeout, interval, message, and ignored failure kinds, then
/// freezes them into an immutable [`WaitConfig`] when `until` runs. Setter
/// order does not matter.
#[derive(Debug, Clone)]
pub struct Wait<C: Clock = SystemClock> {
    config: WaitConfig,
    clock: C,
}

impl Wait<SystemClock> {
    /// Wait on the system clock with default settings (5 s timeout,
    /// 500 ms interval).
    pub fn new() -> Self {
        Wait {
            config: WaitConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for Wait<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Wait<C> {
    /// Wait on a caller-supplied clock; the substitution point for
    /// deterministic tests.
    pub fn with_clock(clock: C) -> Self {
        Wait {
            config: WaitConfig::default(),
            clock,
        }
    }

    /// Replace the whole configuration, e.g. one assembled from a
    /// settings file.
    pub fn configured(mut self, config: WaitConfig) -> Self {
        self.config = config;
        self
    }

    /// Total time budget for the wait.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sleep between attempts.
    pub fn polling_every(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    /// Custom text for the timeout message, replacing the generated
    /// probe description.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = Some(message.into());
        self
    }

    /// Tolerate failures of `kind`: they are retried instead of
    /// propagated, and the most recent one becomes the timeout's cause.
    /// Accumulates across calls.
    pub fn ignoring(mut self, kind: FailureKind) -> Self {
        self.config.ignored.push(kind);
        self
    }

    /// Block until the probe reports ready, a non-ignored failure occurs,
    /// or the timeout elapses.
    pub fn until<P>(self, mut probe: P) -> Result<P::Output, WaitError<P::Error>>
    where
        P: Probe,
        P::Error: Classify,
    {
        run_until(&self.clock, &self.config, None, &mut probe)
    }

    /// Like [`until`](Self::until), additionally checking `abort` once
    /// per attempt; an aborted wait fails with `WaitError::Aborted`.
    pub fn until_aborting<P>(
        self,
        mut probe: P,
        abort: &AbortToken,
    ) -> Result<P::Output, WaitError<P::Error>>
    where
        P: Probe,
        P::Error: Classify,
    {
        run_until(&self.clock, &self.config, Some(abort), &mut probe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND: FailureKind = FailureKind::new("not-found");
    const STALE: FailureKind = FailureKind::new("stale");

    #[test]
    fn setter_order_does_not_change_the_config() {
        let a = Wait::new()
            .timeout(Duration::from_secs(2))
            .polling_every(Duration::from_millis(100))
            .message("queue drained")
            .ignoring(NOT_FOUND)
            .ignoring(STALE);
        let b = Wait::new()
            .ignoring(NOT_FOUND)
            .message("queue drained")
            .polling_every(Duration::from_millis(100))
            .ignoring(STALE)
            .timeout(Duration::from_secs(2));
        assert_eq!(a.config, b.config);
    }

    #[test]
    fn ignoring_accumulates() {
        let wait = Wait::new().ignoring(NOT_FOUND).ignoring(STALE);
        assert!(wait.config.is_ignored(NOT_FOUND));
        assert!(wait.config.is_ignored(STALE));
    }
}
