use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::access::access_gate;
use crate::modules::contacts::router::init_contacts_router;
use crate::modules::health::router::init_health_router;
use crate::modules::not_found;
use crate::modules::pages::router::init_pages_router;
use crate::modules::properties::router::init_properties_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::header::COOKIE,
        ])
        .allow_credentials(true)
}

/// Builds the application router.
///
/// The access gate wraps every route and the fallback; CORS sits outside it
/// so preflight requests are answered without a credential.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_pages_router())
        .nest(
            "/api",
            Router::new()
                .nest("/health", init_health_router())
                .nest("/contacts", init_contacts_router())
                .nest("/properties", init_properties_router()),
        )
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), access_gate))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
}
