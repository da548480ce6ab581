//! Cooperative cancellation for in-flight waits.
//!
//! A waiting thread checks its token once per attempt; any other thread
//! holding a clone can request abort. The wait then fails with
//! `WaitError::Aborted` instead of continuing to its deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable abort flag shared between a waiting thread and its controller.
/// Set once, never cleared; an aborted token stays aborted.
#[derive(Debug, Clone, Default)]
pub struct AbortToken {
    flag: Arc<AtomicBool>,
}

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abort. The wait loop sees the flag at its next iteration
    /// and stops; it does not interrupt a sleep already in progress.
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
