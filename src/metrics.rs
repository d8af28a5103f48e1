use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::warn;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Initialize Prometheus metrics exporter with upkeep task
/// Returns None if observability is disabled or the recorder can't be installed
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            DURATION_BUCKETS,
        )
        .and_then(|builder| {
            builder.set_buckets_for_metric(
                Matcher::Full("upstream_request_duration_seconds".to_string()),
                DURATION_BUCKETS,
            )
        })
        .and_then(|builder| builder.install_recorder());

    let handle = match handle {
        Ok(handle) => handle,
        Err(e) => {
            warn!(error = %e, "Failed to install Prometheus recorder, metrics disabled");
            return None;
        }
    };

    // Spawn upkeep task to clean stale metrics
    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    // Unmatched paths collapse into one label so 404 probes don't explode cardinality
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| {
            if uri_path.starts_with("/api/") {
                "/api/*".to_owned()
            } else {
                "unmatched".to_owned()
            }
        });

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status.to_string()).increment(1);

    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

/// Count access gate outcomes (`forward`, `reject`, `redirect`)
pub fn track_gate_decision(decision: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("gate_decisions_total", "decision" => decision).increment(1);
}

/// Count calls to a backend; `status` is the HTTP status or `error` when none arrived
pub fn track_upstream_request(service: &'static str, status: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("upstream_requests_total", "service" => service, "status" => status.to_string())
        .increment(1);
}

pub fn track_upstream_duration(service: &'static str, duration_secs: f64) {
    if !is_observability_enabled() {
        return;
    }
    histogram!("upstream_request_duration_seconds", "service" => service).record(duration_secs);
}

/// Count contacts cache lookups (`hit`, `miss`, `bypass`)
pub fn track_contacts_cache(result: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("contacts_cache_total", "result" => result).increment(1);
}

pub fn track_lead_created(origin: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("leads_created_total", "origin" => origin).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_without_recorder_are_noops() {
        track_gate_decision("forward");
        track_upstream_request("contacts", "200");
        track_upstream_duration("listings", 0.25);
        track_contacts_cache("miss");
        track_lead_created("contacts");
    }
}
