//! Logging integration for the cadre framework.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-request spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log filter is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; in production a structured JSON format is
/// used. Calling this twice is harmless; the second call is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for an HTTP request.
///
/// Attach this span around route resolution and dispatch so that all log
/// entries emitted while handling the request carry the method and path.
///
/// # Examples
///
/// ```
/// use cadre_core::logging::request_span;
///
/// let span = request_span("GET", "/item/42");
/// let _guard = span.enter();
/// tracing::info!("resolving route");
/// ```
pub fn request_span(method: &str, path: &str) -> tracing::Span {
    tracing::info_span!("request", %method, %path)
}
