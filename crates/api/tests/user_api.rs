mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{auth_token, body_json, build_test_app, get_auth, post_json, post_json_auth};

#[sqlx::test(migrations = "../../migrations")]
async fn admin_creates_user_who_can_log_in(pool: PgPool) {
    let admin = auth_token(&pool, "admin1", "admin").await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/users",
        &admin,
        serde_json::json!({
            "username": "dana",
            "password": "a-strong-password",
            "role": "manager",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["username"], "dana");
    assert_eq!(body["data"]["role"], "manager");
    assert!(body["data"].get("password_hash").is_none());

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "dana", "password": "a-strong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_username_is_a_conflict(pool: PgPool) {
    let admin = auth_token(&pool, "admin1", "admin").await;
    let app = build_test_app(pool);

    let payload = serde_json::json!({
        "username": "dana",
        "password": "a-strong-password",
        "role": "viewer",
    });

    let response = post_json_auth(app.clone(), "/api/v1/admin/users", &admin, payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app, "/api/v1/admin/users", &admin, payload).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_user_validates_role_and_password(pool: PgPool) {
    let admin = auth_token(&pool, "admin1", "admin").await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/users",
        &admin,
        serde_json::json!({
            "username": "dana",
            "password": "a-strong-password",
            "role": "superuser",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        &admin,
        serde_json::json!({
            "username": "dana",
            "password": "short",
            "role": "viewer",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn user_management_is_admin_only(pool: PgPool) {
    let manager = auth_token(&pool, "carol", "manager").await;
    let app = build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/admin/users", &manager).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        &manager,
        serde_json::json!({
            "username": "eve",
            "password": "a-strong-password",
            "role": "viewer",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_users_is_sorted_and_safe(pool: PgPool) {
    let admin = auth_token(&pool, "zed", "admin").await;
    common::create_test_user(&pool, "alice", "viewer").await;
    let app = build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/users", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    // Sorted by username; zed last.
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[1]["username"], "zed");
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}
