//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter for the global subscriber. A non-empty, parseable `RUST_LOG`
/// value wins over the configured level.
pub fn env_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

/// Install the global subscriber.
pub fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = env_filter(rust_log.as_deref(), &config.level);

    match config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_configured_level() {
        let filter = env_filter(Some("debug"), "warn");
        assert_eq!(filter.to_string(), EnvFilter::new("debug").to_string());
        assert_ne!(filter.to_string(), EnvFilter::new("warn").to_string());
    }

    #[test]
    fn configured_level_used_without_rust_log() {
        let expected = EnvFilter::new("warn").to_string();
        assert_eq!(env_filter(None, "warn").to_string(), expected);
        assert_eq!(env_filter(Some("  "), "warn").to_string(), expected);
    }
}
