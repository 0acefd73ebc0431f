//! HTTP-level tests for students, staff and project types.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get_auth, post_json_auth, put_json_auth, student_token,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Project types
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_type_round_trip(pool: PgPool) {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/project-types",
        serde_json::json!({ "name": "Mini Project", "description": "Semester 5" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();
    let uri = format!("/api/v1/project-types/{id}");

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "name": "Minor Project" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Minor Project");
    assert_eq!(json["description"], "Semester 5");

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(common::build_test_app(pool), &uri, &student_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_type_name_too_short_returns_400(pool: PgPool) {
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/project-types",
        serde_json::json!({ "name": "X" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Deleting a project type that a group still uses is refused, and the
/// group keeps a valid reference.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_referenced_project_type_returns_409(pool: PgPool) {
    let fixture = common::group_fixture(&pool).await;
    let group_id = common::create_group(&pool, &fixture, "Holding Team").await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/project-types/{}", fixture.project_type_id),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/project-groups/{group_id}"),
        &admin_token(),
    )
    .await;
    assert_eq!(body_json(response).await["project_type_name"], "Major Project");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_students_cannot_manage_project_types(pool: PgPool) {
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/project-types",
        serde_json::json!({ "name": "Rogue Type" }),
        &student_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Students and staff
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_cgpa_out_of_range_returns_400(pool: PgPool) {
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/students",
        serde_json::json!({ "name": "Over Achiever", "email": "oa@students.test", "cgpa": 11.0 }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_student_email_returns_409(pool: PgPool) {
    common::create_student(&pool, "Dana", 7.0).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/students",
        serde_json::json!({ "name": "Dana Again", "email": "dana@students.test" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_students_listed_by_name(pool: PgPool) {
    common::create_student(&pool, "Zoe", 6.0).await;
    common::create_student(&pool, "Adam", 6.5).await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/students",
        &student_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list[0]["name"], "Adam");
    assert_eq!(list[1]["name"], "Zoe");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_guide_of_a_group_returns_409(pool: PgPool) {
    let fixture = common::group_fixture(&pool).await;
    common::create_group(&pool, &fixture, "Guided Team").await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/staff/{}", fixture.guide_staff_id),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let unused = common::create_staff(&pool, "Idle Prof", "idle@college.test").await;
    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/staff/{unused}"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_stats_counts_groups_by_status(pool: PgPool) {
    let fixture = common::group_fixture(&pool).await;
    let approved = common::create_group(&pool, &fixture, "One").await;
    common::create_group(&pool, &fixture, "Two").await;
    common::create_student(&pool, "Eve", 8.0).await;

    put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/project-groups/{approved}"),
        serde_json::json!({ "status": "approved" }),
        &admin_token(),
    )
    .await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dashboard/stats",
        &student_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = &body_json(response).await["data"];
    assert_eq!(stats["students"], 1);
    assert_eq!(stats["staff"], 1);
    assert_eq!(stats["project_types"], 1);
    assert_eq!(stats["groups_total"], 2);
    assert_eq!(stats["groups_pending"], 1);
    assert_eq!(stats["groups_approved"], 1);
    assert_eq!(stats["groups_rejected"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_database(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
