//! Logging init: stderr subscriber with env-filter control.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. For demos and small embedders;
/// applications that install their own subscriber should skip this.
pub fn init_stderr() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,vigil=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
