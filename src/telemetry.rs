//! Subscriber setup for hosts that want to see the editor's decisions.
//!
//! `PeriodEditor` logs under the `period_timeline::api` targets: every input
//! event at `trace` (`event`, `mode` fields), emitted notifications at `trace`
//! (`notification`, `listeners`), snapshot and geometry replacement at `debug`,
//! and accepted-but-suspect owner data at `warn`.

/// Filter used when `RUST_LOG` is unset: editor warnings and snapshot changes
/// without the per-pointer-move trace noise.
pub const DEFAULT_FILTER: &str = "warn,period_timeline=debug";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when unset. Requires the `telemetry` feature.
///
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FILTER, init_default_tracing};

    #[test]
    fn default_filter_keeps_editor_debug_events() {
        assert!(DEFAULT_FILTER.contains("period_timeline=debug"));
        assert!(DEFAULT_FILTER.starts_with("warn"));
    }

    #[test]
    #[cfg(not(feature = "telemetry"))]
    fn disabled_feature_skips_subscriber_setup() {
        assert!(!init_default_tracing());
    }

    #[test]
    #[cfg(feature = "telemetry")]
    fn second_initialization_is_rejected() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
