//! Telemetry helpers for applications embedding `scroll-chart`.
//!
//! The controller logs layout-mode transitions and resize commands at
//! `debug`, container measurements at `trace` and absorbed surface failures
//! at `warn`. Hosts either call one of the init helpers below or install
//! their own subscriber.

/// Filter used when `RUST_LOG` is unset: sizing decisions from this crate,
/// warnings from everything else.
pub const DEFAULT_TRACING_FILTER: &str = "warn,scroll_chart=debug";

/// Installs a compact `tracing` subscriber using `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"scroll_chart=trace"` to also see every container measurement.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
