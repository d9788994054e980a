use std::{io, sync::Once};

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";
static INIT_LOGGER: Once = Once::new();

/// Installs the stderr `tracing` subscriber once per process.
///
/// stdout is reserved for progress lines, so diagnostics never go there.
pub fn init_tracing() {
    INIT_LOGGER.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init()
        {
            eprintln!("loop-runner: tracing initialization failed: {err}");
        }
    });
}
