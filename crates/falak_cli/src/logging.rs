//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so `--json` output on stdout stays parseable. The
//! filter comes from `RUST_LOG` when set, otherwise from `--log-level`
//! (e.g. `"warn"`, `"debug,falak_base=trace"`).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}
