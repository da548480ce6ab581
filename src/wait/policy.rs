use std::time::Duration;

use super::classify::FailureKind;

/// Immutable configuration for one wait: how long to keep trying, how
/// often, what to say on timeout, and which failure kinds to tolerate.
///
/// Frozen before the loop starts; nothing can reconfigure a wait while it
/// is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitConfig {
    /// Total time budget. Zero still allows exactly one evaluation,
    /// because the deadline is checked after the attempt.
    pub timeout: Duration,
    /// Sleep between attempts. Zero means busy-polling.
    pub interval: Duration,
    /// Custom text for the timeout message; when `None`, the message is
    /// generated from the probe description.
    pub message: Option<String>,
    /// Failure kinds tolerated and retried instead of propagated.
    pub ignored: Vec<FailureKind>,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            interval: Duration::from_millis(500),
            message: None,
            ignored: Vec::new(),
        }
    }
}

impl WaitConfig {
    /// True when failures of `kind` are tolerated.
    pub fn is_ignored(&self, kind: FailureKind) -> bool {
        self.ignored.iter().any(|k| *k == kind)
    }
}
