//! Handlers for the `/project-meetings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use spms_core::error::CoreError;
use spms_core::meeting::MeetingStatus;
use spms_core::types::DbId;
use spms_db::models::meeting_attendance::{MeetingAttendance, RecordAttendance};
use spms_db::models::project_meeting::{
    CreateProjectMeeting, MeetingFilter, ProjectMeeting, UpdateProjectMeeting,
};
use spms_db::repositories::{MeetingAttendanceRepo, ProjectMeetingRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAuth, RequireFaculty};
use crate::state::AppState;

fn meeting_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ProjectMeeting",
        id,
    })
}

/// Response body of `POST /project-meetings/{id}/attendance`.
#[derive(Debug, Serialize)]
pub struct AttendanceRecorded {
    pub meeting: ProjectMeeting,
    pub attendance: Vec<MeetingAttendance>,
}

/// POST /api/v1/project-meetings
///
/// Schedule a meeting. New meetings are always `scheduled`.
pub async fn create(
    RequireFaculty(user): RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProjectMeeting>,
) -> AppResult<(StatusCode, Json<ProjectMeeting>)> {
    let meeting = ProjectMeetingRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        meeting_id = meeting.id,
        project_group_id = meeting.project_group_id,
        "Project meeting scheduled"
    );
    Ok((StatusCode::CREATED, Json(meeting)))
}

/// GET /api/v1/project-meetings
///
/// Optional filters: `group_id`, `guide_staff_id`.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(filter): Query<MeetingFilter>,
) -> AppResult<Json<Vec<ProjectMeeting>>> {
    let meetings = ProjectMeetingRepo::list(&state.pool, &filter).await?;
    Ok(Json(meetings))
}

/// GET /api/v1/project-meetings/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectMeeting>> {
    let meeting = ProjectMeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| meeting_not_found(id))?;
    Ok(Json(meeting))
}

/// PUT /api/v1/project-meetings/{id}
pub async fn update(
    RequireFaculty(_user): RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProjectMeeting>,
) -> AppResult<Json<ProjectMeeting>> {
    let status = input
        .status
        .as_deref()
        .map(str::parse::<MeetingStatus>)
        .transpose()?;

    let meeting = ProjectMeetingRepo::update(&state.pool, id, &input, status)
        .await?
        .ok_or_else(|| meeting_not_found(id))?;
    Ok(Json(meeting))
}

/// DELETE /api/v1/project-meetings/{id}
pub async fn delete(
    RequireFaculty(user): RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectMeetingRepo::delete(&state.pool, id).await? {
        return Err(meeting_not_found(id));
    }
    tracing::info!(user_id = user.user_id, meeting_id = id, "Project meeting deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/project-meetings/{id}/attendance
///
/// Record attendance for several students and close the meeting as
/// `completed`.
pub async fn record_attendance(
    RequireFaculty(user): RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<RecordAttendance>,
) -> AppResult<Json<AttendanceRecorded>> {
    let (meeting, attendance) = MeetingAttendanceRepo::record_for_meeting(&state.pool, id, &input)
        .await?
        .ok_or_else(|| meeting_not_found(id))?;

    tracing::info!(
        user_id = user.user_id,
        meeting_id = id,
        entries = attendance.len(),
        "Meeting attendance recorded"
    );

    Ok(Json(AttendanceRecorded {
        meeting,
        attendance,
    }))
}
