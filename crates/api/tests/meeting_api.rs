//! HTTP-level tests for meetings and attendance.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, faculty_token, get_auth, post_json_auth, put_json_auth,
    student_token,
};
use sqlx::PgPool;

const GUIDE_EMAIL: &str = "guide@college.test";

struct MeetingFixture {
    group_id: i64,
    guide_staff_id: i64,
    meeting_id: i64,
}

async fn schedule_meeting(pool: &PgPool) -> MeetingFixture {
    let fixture = common::group_fixture(pool).await;
    let group_id = common::create_group(pool, &fixture, "Meeting Team").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/project-meetings",
        serde_json::json!({
            "project_group_id": group_id,
            "guide_staff_id": fixture.guide_staff_id,
            "meeting_date_time": "2099-01-15T10:00:00Z",
            "purpose": "Synopsis review",
        }),
        &faculty_token(GUIDE_EMAIL),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "scheduled");

    MeetingFixture {
        group_id,
        guide_staff_id: fixture.guide_staff_id,
        meeting_id: json["id"].as_i64().unwrap(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schedule_and_list_meetings_by_group(pool: PgPool) {
    let meeting = schedule_meeting(&pool).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/project-meetings?groupId={}", meeting.group_id),
        &student_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["purpose"], "Synopsis review");
    assert_eq!(list[0]["guide_staff_id"], meeting.guide_staff_id);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/dashboard/stats",
        &student_token(),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["upcoming_meetings"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_students_cannot_schedule_meetings(pool: PgPool) {
    let fixture = common::group_fixture(&pool).await;
    let group_id = common::create_group(&pool, &fixture, "Team").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/project-meetings",
        serde_json::json!({
            "project_group_id": group_id,
            "guide_staff_id": fixture.guide_staff_id,
            "meeting_date_time": "2099-01-15T10:00:00Z",
        }),
        &student_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_meeting_status(pool: PgPool) {
    let meeting = schedule_meeting(&pool).await;
    let uri = format!("/api/v1/project-meetings/{}", meeting.meeting_id);

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "status": "cancelled", "status_description": "Guide on leave" }),
        &faculty_token(GUIDE_EMAIL),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "cancelled");
    assert_eq!(json["status_description"], "Guide on leave");
    assert_eq!(json["purpose"], "Synopsis review");

    let response = put_json_auth(
        common::build_test_app(pool),
        &uri,
        serde_json::json!({ "status": "postponed" }),
        &faculty_token(GUIDE_EMAIL),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_attendance_completes_meeting(pool: PgPool) {
    let meeting = schedule_meeting(&pool).await;
    let present = common::create_student(&pool, "Present Pat", 7.0).await;
    let absent = common::create_student(&pool, "Absent Abe", 7.0).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/project-meetings/{}/attendance", meeting.meeting_id),
        serde_json::json!({
            "entries": [
                { "student_id": present, "is_present": true },
                { "student_id": absent, "is_present": false, "remarks": "Unwell" },
            ],
            "status_description": "Synopsis accepted",
        }),
        &faculty_token(GUIDE_EMAIL),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["meeting"]["status"], "completed");
    assert_eq!(json["attendance"].as_array().unwrap().len(), 2);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/project-meeting-attendance?meetingId={}", meeting.meeting_id),
        &student_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let abe = rows
        .iter()
        .find(|r| r["student_name"] == "Absent Abe")
        .expect("absent student should be listed");
    assert_eq!(abe["is_present"], false);
    assert_eq!(abe["remarks"], "Unwell");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_attendance_submission_returns_400(pool: PgPool) {
    let meeting = schedule_meeting(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/project-meetings/{}/attendance", meeting.meeting_id),
        serde_json::json!({ "entries": [] }),
        &faculty_token(GUIDE_EMAIL),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/project-meetings/{}", meeting.meeting_id),
        &student_token(),
    )
    .await;
    assert_eq!(body_json(response).await["status"], "scheduled");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_attendance_submission_replaces_previous(pool: PgPool) {
    let meeting = schedule_meeting(&pool).await;
    let student = common::create_student(&pool, "Late Lee", 6.0).await;

    for is_present in [false, true] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/project-meeting-attendance",
            serde_json::json!({
                "project_meeting_id": meeting.meeting_id,
                "student_id": student,
                "is_present": is_present,
            }),
            &faculty_token(GUIDE_EMAIL),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/project-meeting-attendance?meeting_id={}", meeting.meeting_id),
        &student_token(),
    )
    .await;
    let rows = body_json(response).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["is_present"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attendance_for_unknown_meeting_returns_404(pool: PgPool) {
    let student = common::create_student(&pool, "Nobody", 6.0).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/project-meetings/999999/attendance",
        serde_json::json!({ "entries": [{ "student_id": student, "is_present": true }] }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_group_removes_its_meetings(pool: PgPool) {
    let meeting = schedule_meeting(&pool).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/project-groups/{}", meeting.group_id),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/project-meetings/{}", meeting.meeting_id),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
