//! Logging setup using tracing.
//!
//! Installs a `tracing-subscriber` registry writing to stderr and bridges `log`
//! crate records into tracing. The filter comes from the `--log-level` option
//! when given, otherwise from `RUST_LOG`, otherwise `warn`.

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "warn";

fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging.
///
/// Subsequent calls are ignored.
pub(crate) fn init_logging(directive: Option<&str>) {
    LOGGER_INITIALIZED.get_or_init(|| {
        tracing_log::LogTracer::init().ok();

        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(build_filter(directive))
            .with(fmt_layer)
            .try_init()
            .ok();
    });
}
