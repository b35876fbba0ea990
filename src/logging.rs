//! Logging setup for host applications with dual output (stdout + debug.log)

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter from RUST_LOG, defaulting to "info" when unset or invalid
///
/// Each output layer needs its own filter instance, so this is built once
/// per layer rather than shared.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging with dual output: stdout + debug.log file
///
/// Both outputs honor the RUST_LOG environment variable. Intended for
/// binaries embedding this crate; libraries should leave subscriber
/// installation to the host.
///
/// The appender guard is forgotten to keep the file writer alive for the
/// program lifetime.
pub fn init_logging() {
    let file_appender = tracing_appender::rolling::never(".", "debug.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(env_filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter()),
        )
        .init();

    std::mem::forget(_guard);
}
