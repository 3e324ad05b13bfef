use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber for the binary.
pub fn init_logging(silent: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(silent, rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Silent mode always means errors only. Otherwise `RUST_LOG` is honored
/// when it parses, falling back to `info`.
pub fn log_filter(silent: bool, rust_log: Option<&str>) -> EnvFilter {
    if silent {
        return EnvFilter::new("error");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
