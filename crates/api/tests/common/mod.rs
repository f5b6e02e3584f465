use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use sattva_api::config::{ServerConfig, StripeConfig};
use sattva_api::routes;
use sattva_api::state::AppState;
use sattva_stripe::StripeApi;

/// Webhook signing secret used by signature tests.
pub const TEST_WEBHOOK_SECRET: &str = "whsec_test_secret";

/// Build a test `ServerConfig` with safe defaults.
///
/// The processor base points at a local port nothing listens on, so a
/// test that accidentally reaches the processor fails fast instead of
/// hitting the real API.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        stripe: StripeConfig {
            secret_key: "sk_test_unset".to_string(),
            webhook_secret: TEST_WEBHOOK_SECRET.to_string(),
            api_base: "http://127.0.0.1:12111".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let stripe = StripeApi::with_base(
        config.stripe.secret_key.clone(),
        config.stripe.api_base.clone(),
    );

    let state = AppState {
        pool,
        config: Arc::new(config),
        stripe: Arc::new(stripe),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request_json(app, Method::POST, uri, body).await
}

/// Issue a PUT request with a JSON body against the app.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request_json(app, Method::PUT, uri, body).await
}

/// Issue a PATCH request with a JSON body against the app.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request_json(app, Method::PATCH, uri, body).await
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn request_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid enquiry submission payload, tweakable per test.
pub fn enquiry_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "email": "asha.rao@example.com",
        "phone": "+919876543210",
        "pincode": "560001",
        "program": "Happiness Program",
        "message": "Weekend batch preferred"
    })
}

/// A valid program creation payload, tweakable per test.
pub fn program_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": "meditation",
        "description": "Guided breathing and meditation over three evenings.",
        "duration": "3 days",
        "price_inr": 2500,
        "image": "/images/program.jpg"
    })
}
