//! Logging initialization.
//!
//! Structured JSON logs go to stdout and to a daily-rolling file so the
//! same output can be read locally and shipped by a collector.

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// The log level comes from `RUST_LOG`, defaulting to
/// `info,wanderlust_server=debug`. Files rotate daily under `LOG_DIR`
/// (default `logs/`) as `wanderlust.log.YYYY-MM-DD`.
///
/// The returned `WorkerGuard` must be held for the life of `main`;
/// dropping it flushes buffered file output.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let file_appender = rolling::daily(&log_dir, "wanderlust.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wanderlust_server=debug"));

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(file_writer);

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        // A subscriber may already be set (tests); the server still runs.
        eprintln!("Failed to initialize tracing: {err}");
    }

    guard
}
