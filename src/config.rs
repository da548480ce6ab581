//! Wait settings as an embeddable config-file section.
//!
//! Applications that read their configuration from TOML can carry a
//! `[wait]`-style section in this shape and convert it to a runtime
//! [`WaitConfig`]. Missing fields fall back to the built-in defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::wait::{FailureKind, WaitConfig};

/// Wait parameters as they appear in a TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitSettings {
    /// Total timeout in seconds (e.g. 0.5 = 500ms).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
    /// Sleep between attempts in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Custom timeout message.
    #[serde(default)]
    pub message: Option<String>,
    /// Names of failure kinds to tolerate; resolved against the kinds the
    /// application passes to [`WaitSettings::to_config_with_kinds`].
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_timeout_secs() -> f64 {
    5.0
}

fn default_interval_ms() -> u64 {
    500
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            interval_ms: default_interval_ms(),
            message: None,
            ignore: Vec::new(),
        }
    }
}

impl WaitSettings {
    /// Convert to a runtime config. `ignore` names are dropped here since
    /// no kinds are known; use [`to_config_with_kinds`](Self::to_config_with_kinds)
    /// to resolve them.
    pub fn to_config(&self) -> WaitConfig {
        self.to_config_with_kinds(&[])
    }

    /// Convert to a runtime config, resolving `ignore` names against the
    /// kinds the application knows about. Unknown names are skipped with
    /// a warning rather than failing the wait.
    pub fn to_config_with_kinds(&self, kinds: &[FailureKind]) -> WaitConfig {
        let ignored = self
            .ignore
            .iter()
            .filter_map(|name| match kinds.iter().find(|k| k.name() == name.as_str()) {
                Some(kind) => Some(*kind),
                None => {
                    tracing::warn!(%name, "unknown failure kind in wait settings");
                    None
                }
            })
            .collect();
        WaitConfig {
            timeout: Duration::from_secs_f64(self.timeout_secs.max(0.0)),
            interval: Duration::from_millis(self.interval_ms),
            message: self.message.clone(),
            ignored,
        }
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let settings: WaitSettings = toml::from_str(&data)?;
        Ok(settings)
    }
}
