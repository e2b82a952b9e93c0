// * Telemetry - structured logging to stderr
// * stdout is reserved for report lines, so every layer writes to stderr

use crate::config::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// * RUST_LOG wins over the supplied level
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initializes the tracing subscriber with JSON formatting
///
/// # Example
/// ```ignore
/// use testgen::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(confile = "test.xml", "Loading configuration");
/// ```
pub fn init_tracing() {
    init_tracing_with_level(DEFAULT_LOG_FILTER);
}

/// Initializes tracing with custom log level
pub fn init_tracing_with_level(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init();
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        // * A second global subscriber is rejected by try_init, not a panic
        init_tracing_with_level("debug");
        init_tracing();
        tracing::debug!("telemetry initialized twice");
    }

    #[test]
    fn test_filter_accepts_directives() {
        let filter = env_filter("testgen=debug,warn");
        assert!(!filter.to_string().is_empty());
    }
}
