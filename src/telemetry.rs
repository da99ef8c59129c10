//! Telemetry helpers for applications embedding `linechart-rs`.
//!
//! The engine only emits `tracing` events (`debug` for input changes and
//! layout passes, `trace` for pointer hits, `warn` for skipped passes).
//! Hosts either install their own subscriber or call one of the helpers below
//! with the `telemetry` feature enabled.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive,
/// e.g. `"linechart_rs=debug"`.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
