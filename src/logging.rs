// src/logging.rs
use std::io::IsTerminal;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "FILEMETA_LOG";

/// Installs the stderr subscriber. Safe to call more than once.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init: a test harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .try_init();
    });
}
