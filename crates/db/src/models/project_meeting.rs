//! Project meeting model and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `project_meetings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMeeting {
    pub id: DbId,
    pub project_group_id: DbId,
    pub guide_staff_id: DbId,
    pub meeting_date_time: Timestamp,
    pub purpose: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub status_description: Option<String>,
    pub status_date_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectMeeting {
    #[serde(alias = "projectGroupId")]
    pub project_group_id: DbId,
    #[serde(alias = "guideStaffId")]
    pub guide_staff_id: DbId,
    #[serde(alias = "meetingDateTime")]
    pub meeting_date_time: Timestamp,
    pub purpose: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a meeting. A `status` change also stamps
/// `status_date_time`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectMeeting {
    pub meeting_date_time: Option<Timestamp>,
    pub purpose: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub status_description: Option<String>,
}

/// Query parameters for `GET /project-meetings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingFilter {
    #[serde(alias = "groupId", alias = "project_group_id")]
    pub group_id: Option<DbId>,
    #[serde(alias = "guideStaffId")]
    pub guide_staff_id: Option<DbId>,
}
