//! Blocking condition-polling: evaluate a probe until it reports ready,
//! tolerating configured failure kinds, until a deadline passes.

pub mod clock;
pub mod config;
pub mod control;
pub mod logging;
pub mod wait;
