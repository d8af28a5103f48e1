#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing,
};
use http_body_util::BodyExt;
use nextprop::config::cors::CorsConfig;
use nextprop::nextprop_cache::RedisCache;
use nextprop::config::upstream::UpstreamConfig;
use nextprop::router::init_router;
use nextprop::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// A token long enough to pass the gate's shape check.
pub const VALID_TOKEN: &str = "test-session-token-0123456789";

pub fn auth_cookie() -> String {
    format!("auth_token={}", VALID_TOKEN)
}

/// How the mock backend answers.
#[derive(Clone)]
pub struct MockBehavior {
    pub contacts_status: StatusCode,
    pub contacts_body: Value,
    pub listings_status: StatusCode,
    pub listings_body: Value,
    pub create_status: StatusCode,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            contacts_status: StatusCode::OK,
            contacts_body: json!({
                "contacts": [
                    { "id": "c1", "contactName": "Jane Realtor", "firstName": "Jane", "lastName": "Doe" },
                    { "id": "c2", "firstName": "John", "lastName": "Smith" },
                    { "id": "c3", "lastName": "Solo" },
                    { "id": "c4", "email": "nobody@example.com" }
                ],
                "meta": { "total": 4 }
            }),
            listings_status: StatusCode::OK,
            listings_body: json!([
                {
                    "property_id": 101,
                    "price": 1250000,
                    "beds": 3,
                    "baths": 2,
                    "address": {
                        "line": "1 Ocean Dr",
                        "city": "Miami Beach",
                        "state_code": "FL",
                        "postal_code": "33139"
                    },
                    "image_url": "https://img.test/101.jpg",
                    "contact": {
                        "name": "Maria Garcia",
                        "email": "maria@realestate.com",
                        "phone": "(305) 555-0101"
                    }
                },
                {
                    "property_id": "102",
                    "price": "875,000",
                    "address": {
                        "line": "22 Brickell Ave",
                        "city": "Miami",
                        "state_code": "FL",
                        "postal_code": "33131"
                    },
                    "image_url": ""
                }
            ]),
            create_status: StatusCode::CREATED,
        }
    }
}

/// What the mock backend received.
#[derive(Default)]
pub struct Recorded {
    pub authorization: Vec<Option<String>>,
    pub search_queries: Vec<HashMap<String, String>>,
    pub created: Vec<Value>,
}

#[derive(Clone)]
struct MockState {
    behavior: MockBehavior,
    recorded: Arc<Mutex<Recorded>>,
}

async fn list_contacts(State(mock): State<MockState>, headers: HeaderMap) -> Response {
    mock.recorded.lock().unwrap().authorization.push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );

    if mock.behavior.contacts_status.is_success() {
        Json(mock.behavior.contacts_body.clone()).into_response()
    } else {
        (
            mock.behavior.contacts_status,
            Json(json!({ "error": "Invalid API key" })),
        )
            .into_response()
    }
}

async fn create_contact(State(mock): State<MockState>, Json(body): Json<Value>) -> Response {
    mock.recorded.lock().unwrap().created.push(body.clone());

    if mock.behavior.create_status.is_success() {
        (
            mock.behavior.create_status,
            Json(json!({ "contact": { "id": "new-contact-1", "name": body["name"] } })),
        )
            .into_response()
    } else {
        (
            mock.behavior.create_status,
            Json(json!({ "error": "Duplicate contact" })),
        )
            .into_response()
    }
}

async fn ai_search(
    State(mock): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    mock.recorded.lock().unwrap().search_queries.push(query);

    if mock.behavior.listings_status.is_success() {
        Json(mock.behavior.listings_body.clone()).into_response()
    } else {
        (mock.behavior.listings_status, "upstream exploded").into_response()
    }
}

/// Starts an in-process contacts + listings backend on a random port.
pub async fn spawn_mock_upstream(behavior: MockBehavior) -> (String, Arc<Mutex<Recorded>>) {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let state = MockState {
        behavior,
        recorded: recorded.clone(),
    };

    let app = Router::new()
        .route("/contacts", routing::get(list_contacts).post(create_contact))
        .route("/api/properties/ai-search", routing::get(ai_search))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}

fn test_state(upstream_url: &str) -> AppState {
    let mut upstream = UpstreamConfig::single(upstream_url);
    upstream.contacts_api_key = Some("test-api-key".to_string());
    upstream.timeout_secs = 5;

    AppState::new(upstream, CorsConfig::from_origins("http://localhost:3000")).unwrap()
}

pub fn setup_test_app(upstream_url: &str) -> Router {
    init_router(test_state(upstream_url))
}

/// Connects to `REDIS_URL` (default `redis://localhost:6379`) under a key
/// prefix unique to the calling test.
pub async fn connect_test_cache() -> RedisCache {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".into());
    let prefix = format!("nextprop-test-{}", uuid::Uuid::new_v4());
    RedisCache::new(&url, Duration::from_secs(60), prefix)
        .await
        .unwrap()
}

pub fn setup_cached_app(upstream_url: &str, cache: RedisCache) -> Router {
    init_router(test_state(upstream_url).with_cache(cache))
}

/// An app whose backends are unreachable; enough for gate-only tests.
pub fn setup_offline_app() -> Router {
    setup_test_app("http://127.0.0.1:9")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}
