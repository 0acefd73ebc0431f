#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use spms_api::auth::jwt::{generate_access_token, JwtConfig};
use spms_api::config::ServerConfig;
use spms_api::router::build_app_router;
use spms_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        bootstrap_admin: None,
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_for(login_id: i64, role: &str, email: &str) -> String {
    generate_access_token(login_id, role, email, &test_config().jwt)
        .expect("token generation should succeed")
}

pub fn admin_token() -> String {
    token_for(1, "admin", "admin@test.com")
}

pub fn faculty_token(email: &str) -> String {
    token_for(2, "faculty", email)
}

pub fn student_token() -> String {
    token_for(3, "student", "student@test.com")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed data (created through the API as an admin)
// ---------------------------------------------------------------------------

pub async fn create_project_type(pool: &PgPool, name: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/project-types",
        serde_json::json!({ "name": name }),
        &admin_token(),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn create_staff(pool: &PgPool, name: &str, email: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/staff",
        serde_json::json!({ "name": name, "email": email }),
        &admin_token(),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn create_student(pool: &PgPool, name: &str, cgpa: f64) -> i64 {
    let email = format!("{}@students.test", name.to_lowercase().replace(' ', "."));
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/students",
        serde_json::json!({ "name": name, "email": email, "cgpa": cgpa }),
        &admin_token(),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// A project type plus a guide, ready for group creation.
pub struct GroupFixture {
    pub project_type_id: i64,
    pub guide_staff_id: i64,
}

pub async fn group_fixture(pool: &PgPool) -> GroupFixture {
    GroupFixture {
        project_type_id: create_project_type(pool, "Major Project").await,
        guide_staff_id: create_staff(pool, "Dr. Guide", "guide@college.test").await,
    }
}

pub async fn create_group(pool: &PgPool, fixture: &GroupFixture, name: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/project-groups",
        serde_json::json!({
            "name": name,
            "title": format!("{name} title"),
            "project_type_id": fixture.project_type_id,
            "guide_staff_id": fixture.guide_staff_id,
        }),
        &student_token(),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
