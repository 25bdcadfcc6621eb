use closeables_core::{CLOSEABLES_LOG_VAR, DEFAULT_LOG_FILTER};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// Reads the filter from `CLOSEABLES_LOG`, falling back to `info`, and writes
/// compact lines to stderr. Fails if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(CLOSEABLES_LOG_VAR)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize tracing for tests, routing output through the test harness
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_env(CLOSEABLES_LOG_VAR)
        .unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected_not_panicking() {
        init_for_tests();
        assert!(init().is_err());
    }
}
