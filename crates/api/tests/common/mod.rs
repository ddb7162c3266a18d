#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use stockroom_api::auth::jwt::{generate_access_token, JwtConfig};
use stockroom_api::auth::password::hash_password;
use stockroom_api::config::{SeedConfig, ServerConfig};
use stockroom_api::routes;
use stockroom_api::state::AppState;
use stockroom_db::models::user::{CreateUser, User};
use stockroom_db::repositories::UserRepo;

/// Plaintext password used for all test users.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        low_stock_threshold: 5,
        seed: SeedConfig {
            admin_username: "admin".to_string(),
            admin_password: None,
            categories: Vec::new(),
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
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

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let origin: HeaderValue = "http://localhost:5173".parse().unwrap();
    let cors = CorsLayer::new()
        .allow_origin([origin])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
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

// ---------------------------------------------------------------------------
// Test users and tokens
// ---------------------------------------------------------------------------

/// Create a user directly in the database with [`TEST_PASSWORD`].
pub async fn create_test_user(pool: &PgPool, username: &str, role: &str) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: hashed,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Issue an access token for a user, signed with the test JWT secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.username, &user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create a user with the given role and return a ready-to-use bearer token.
pub async fn auth_token(pool: &PgPool, username: &str, role: &str) -> String {
    let user = create_test_user(pool, username, role).await;
    token_for(&user)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn with_bearer(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = with_bearer(Request::builder().method(Method::GET).uri(uri), Some(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_bearer(Request::builder().method(Method::POST).uri(uri), Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_bearer(Request::builder().method(Method::PUT).uri(uri), Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = with_bearer(Request::builder().method(Method::DELETE).uri(uri), Some(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = with_bearer(Request::builder().method(Method::POST).uri(uri), Some(token))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect the response body as UTF-8 text (for CSV downloads).
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Insert a category and a location so asset creation preconditions hold.
pub async fn seed_catalog(app: Router, admin_token: &str, category: &str, location: &str) {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/catalog/categories",
        admin_token,
        serde_json::json!({ "name": category }),
    )
    .await;
    assert!(response.status().is_success(), "category seed failed");

    let response = post_json_auth(
        app,
        "/api/v1/catalog/locations",
        admin_token,
        serde_json::json!({ "name": location }),
    )
    .await;
    assert!(response.status().is_success(), "location seed failed");
}

/// Create an asset via the API and return its JSON representation.
pub async fn create_asset(
    app: Router,
    admin_token: &str,
    name: &str,
    category: &str,
    location: &str,
    quantity: i64,
) -> serde_json::Value {
    let response = post_json_auth(
        app,
        "/api/v1/assets",
        admin_token,
        serde_json::json!({
            "name": name,
            "serial": format!("SN-{name}"),
            "category": category,
            "location": location,
            "quantity": quantity,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
