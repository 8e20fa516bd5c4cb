use std::io;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogFormat;

/// Filter used by the API server when `RUST_LOG` is not set.
pub const SERVER_FILTER: &str = "info,tower_http=info,axum=info";

/// Initialize the global tracing subscriber writing to stdout.
/// - Respects `RUST_LOG` if set, otherwise uses `default_filter`
/// - `LogFormat::Json` emits one JSON object per event
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging(format: LogFormat, default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);

    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
