use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global stderr subscriber. `filter` uses `EnvFilter` syntax;
/// an unparsable filter falls back to [`DEFAULT_FILTER`].
pub fn init(filter: &str) {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .is_ok();

    if installed && let Some(e) = rejected {
        tracing::warn!("invalid log filter {filter:?}: {e}");
    }
}
