//! Tracing subscriber setup.
//!
//! Logging starts before the config file is read, so config loading is
//! itself logged. The filter is swapped for the configured one afterwards
//! unless `RUST_LOG` is set.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Filter used until the configuration has been read.
pub const STARTUP_FILTER: &str = "warn";

/// Picks the filter directive: `RUST_LOG` when set, otherwise `configured`.
pub fn effective_filter(rust_log: Option<String>, configured: &str) -> String {
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Handle to the installed subscriber's filter.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Applies the configured filter, unless `RUST_LOG` overrides it.
    pub fn apply_filter(&self, configured: &str) -> Result<(), reload::Error> {
        let directive = effective_filter(std::env::var("RUST_LOG").ok(), configured);
        self.filter.reload(EnvFilter::new(directive))
    }
}

/// Installs the global subscriber, writing to stderr so logs stay off the
/// board.
pub fn init() -> LogHandle {
    let directive = effective_filter(std::env::var("RUST_LOG").ok(), STARTUP_FILTER);
    let (filter, handle) = reload::Layer::new(EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    LogHandle { filter: handle }
}
