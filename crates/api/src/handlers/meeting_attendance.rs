//! Handlers for the `/project-meeting-attendance` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use spms_db::models::meeting_attendance::{
    CreateMeetingAttendance, MeetingAttendance, MeetingAttendanceWithStudent,
};
use spms_db::repositories::MeetingAttendanceRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAuth, RequireFaculty};
use crate::query::MeetingIdParams;
use crate::state::AppState;

/// GET /api/v1/project-meeting-attendance?meeting_id=
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<MeetingIdParams>,
) -> AppResult<Json<Vec<MeetingAttendanceWithStudent>>> {
    let meeting_id = params.require()?;
    let rows = MeetingAttendanceRepo::list_by_meeting(&state.pool, meeting_id).await?;
    Ok(Json(rows))
}

/// POST /api/v1/project-meeting-attendance
///
/// Records one student's attendance. A second submission for the same
/// student and meeting replaces the first.
pub async fn create(
    RequireFaculty(_user): RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMeetingAttendance>,
) -> AppResult<(StatusCode, Json<MeetingAttendance>)> {
    let row = MeetingAttendanceRepo::upsert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
