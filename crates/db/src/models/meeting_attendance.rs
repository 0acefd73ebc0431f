//! Meeting attendance model and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `project_meeting_attendance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingAttendance {
    pub id: DbId,
    pub project_meeting_id: DbId,
    pub student_id: DbId,
    pub is_present: bool,
    pub remarks: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Attendance row joined with the student's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingAttendanceWithStudent {
    pub id: DbId,
    pub project_meeting_id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub is_present: bool,
    pub remarks: Option<String>,
    pub description: Option<String>,
}

/// DTO for recording a single attendance row. Re-recording the same
/// student for the same meeting overwrites the earlier row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMeetingAttendance {
    pub project_meeting_id: DbId,
    pub student_id: DbId,
    pub is_present: bool,
    pub remarks: Option<String>,
    pub description: Option<String>,
}

/// One student's entry in a bulk attendance submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: DbId,
    pub is_present: bool,
    pub remarks: Option<String>,
}

/// Body of `POST /project-meetings/{id}/attendance`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAttendance {
    #[validate(length(min = 1, message = "At least one attendance entry is required"))]
    pub entries: Vec<AttendanceEntry>,
    pub status_description: Option<String>,
}
