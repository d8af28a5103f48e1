use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use std::time::Instant;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "storage/logs";

/// Log level for a response status: 5xx are errors, 4xx warnings.
fn status_level(status: u16) -> Level {
    match status {
        400..=499 => Level::WARN,
        500..=599 => Level::ERROR,
        _ => Level::INFO,
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    let level = status_level(status);
    if level == Level::ERROR {
        error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Server error"
        );
    } else if level == Level::WARN {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Client error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency.as_millis(),
            "Request completed"
        );
    }

    response
}

fn init_tracer(otlp_endpoint: String) -> Result<Tracer, TraceError> {
    // Set up trace context propagator for distributed tracing
    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new(
            "environment",
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        ),
    ]);

    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

/// Sets up console, rolling file and (when `OTEL_EXPORTER_OTLP_ENDPOINT` is
/// set) OpenTelemetry output. Must be called from inside the tokio runtime.
pub fn init_tracing() {
    use std::fs;
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,hyper=info,tonic=info",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    // File output is skipped when the log directory can't be created
    let log_dir_ready = match fs::create_dir_all(LOG_DIR) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to create {LOG_DIR}: {e}. Logging to console only");
            false
        }
    };

    let file_layer = log_dir_ready.then(|| {
        fmt::layer()
            .with_writer(RollingFileAppender::new(
                Rotation::DAILY,
                LOG_DIR,
                "nextprop.log",
            ))
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(EnvFilter::new("error"))
    });

    // Structured logs for ingestion (Loki etc.)
    let json_layer = log_dir_ready.then(|| {
        fmt::layer()
            .json()
            .with_writer(RollingFileAppender::new(
                Rotation::DAILY,
                LOG_DIR,
                "nextprop.json",
            ))
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"))
    });

    let otel_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .filter(|e| !e.is_empty());

    let tracer = match otel_endpoint.map(init_tracer) {
        Some(Ok(tracer)) => Some(tracer),
        Some(Err(e)) => {
            eprintln!("Failed to initialize OpenTelemetry: {e}. Continuing without it");
            None
        }
        None => None,
    };

    match tracer {
        Some(tracer) => {
            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .with(json_layer)
                .with(tracing_opentelemetry::layer().with_tracer(tracer))
                .init();

            info!("Tracing initialized with OpenTelemetry export");
        }
        None => {
            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .with(json_layer)
                .init();

            info!("Tracing initialized");
        }
    }
}

pub async fn shutdown_tracer() {
    info!("Shutting down OpenTelemetry tracer...");

    global::shutdown_tracer_provider();

    info!("OpenTelemetry tracer shutdown complete");
}
