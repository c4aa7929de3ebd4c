//! Development-time tracing.
//!
//! Diagnostics go to stderr so stdout carries only the report.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to [`DEFAULT_FILTER`]. Output: stderr,
/// compact format without timestamps (a run lasts milliseconds).
///
/// # Example
/// ```bash
/// RUST_LOG=conncheck=debug conncheck --json
/// ```
pub fn init() {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(env_filter(raw.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Parse `raw` directives, falling back to [`DEFAULT_FILTER`].
pub fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directives_use_default() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn valid_directives_are_kept() {
        assert_eq!(
            env_filter(Some("conncheck=debug")).to_string(),
            "conncheck=debug"
        );
    }

    #[test]
    fn invalid_directives_fall_back() {
        assert_eq!(env_filter(Some("conncheck=loud")).to_string(), DEFAULT_FILTER);
    }
}
