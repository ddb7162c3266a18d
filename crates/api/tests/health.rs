mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, build_test_app, get};

#[sqlx::test(migrations = "../../migrations")]
async fn health_reports_ok_with_live_database(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
    assert!(body["version"].is_string());
}

#[sqlx::test(migrations = "../../migrations")]
async fn health_is_not_nested_under_api_prefix(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
