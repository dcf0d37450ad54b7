//! Logging setup for the example binaries.
//!
//! Library code only emits `tracing` events. Binaries call [`init`] once at
//! startup; the filter comes from `RUST_LOG` and falls back to `warn`, so a
//! plain run shows nothing but the demo transcript.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `RUST_LOG`, or [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber, writing to stderr.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn test_default_filter_level() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
