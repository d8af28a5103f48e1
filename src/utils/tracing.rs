//! Tracing utilities and helper macros for observability
//!
//! Spans for calls to the contacts and listings backends, and a couple of
//! helpers for recording outcomes on whatever span is current.

use tracing::Span;

/// Create a span for calls to an upstream HTTP backend
///
/// # Example
/// ```ignore
/// let span = external_http_span!("contacts", "GET", "http://crm/contacts");
/// async {
///     // request
/// }.instrument(span).await;
/// ```
#[macro_export]
macro_rules! external_http_span {
    ($service:expr, $method:expr, $url:expr) => {
        tracing::info_span!(
            "http.client",
            service.name = $service,
            http.method = $method,
            http.url = $url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
            error.message = tracing::field::Empty
        )
    };
}

/// Record a failed operation on the current span with an error message
pub fn record_error(message: &str) {
    let span = Span::current();
    span.record("otel.status_code", "ERROR");
    span.record("error.message", message);
}

/// Record HTTP status code on the current span
pub fn record_http_status(status: u16) {
    let span = Span::current();
    span.record("http.status_code", status);
    if status >= 400 {
        span.record("otel.status_code", "ERROR");
    } else {
        span.record("otel.status_code", "OK");
    }
}

/// Log an audit event at INFO level
///
/// For changes made on a backend on behalf of a user, such as creating a lead.
#[macro_export]
macro_rules! audit_event {
    ($action:expr, $resource:expr, $($field:tt)*) => {
        tracing::info!(
            audit.action = $action,
            audit.resource = $resource,
            $($field)*
        )
    };
}
