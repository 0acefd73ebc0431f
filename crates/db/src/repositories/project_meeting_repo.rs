//! Repository for the `project_meetings` table.

use spms_core::meeting::MeetingStatus;
use spms_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_meeting::{
    CreateProjectMeeting, MeetingFilter, ProjectMeeting, UpdateProjectMeeting,
};

pub(crate) const COLUMNS: &str = "id, project_group_id, guide_staff_id, meeting_date_time, \
                                  purpose, location, notes, status, status_description, \
                                  status_date_time, created_at, updated_at";

/// Provides CRUD operations for project meetings.
pub struct ProjectMeetingRepo;

impl ProjectMeetingRepo {
    /// Schedule a meeting. New meetings start in `scheduled`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectMeeting,
    ) -> Result<ProjectMeeting, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_meetings
                (project_group_id, guide_staff_id, meeting_date_time, purpose, location, notes, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMeeting>(&query)
            .bind(input.project_group_id)
            .bind(input.guide_staff_id)
            .bind(input.meeting_date_time)
            .bind(&input.purpose)
            .bind(&input.location)
            .bind(&input.notes)
            .bind(MeetingStatus::Scheduled.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectMeeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_meetings WHERE id = $1");
        sqlx::query_as::<_, ProjectMeeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List meetings, most recent meeting time first.
    pub async fn list(
        pool: &PgPool,
        filter: &MeetingFilter,
    ) -> Result<Vec<ProjectMeeting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_meetings
             WHERE ($1::BIGINT IS NULL OR project_group_id = $1)
               AND ($2::BIGINT IS NULL OR guide_staff_id = $2)
             ORDER BY meeting_date_time DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectMeeting>(&query)
            .bind(filter.group_id)
            .bind(filter.guide_staff_id)
            .fetch_all(pool)
            .await
    }

    /// Update a meeting. Only non-`None` fields are applied; a status change
    /// also stamps `status_date_time`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectMeeting,
        status: Option<MeetingStatus>,
    ) -> Result<Option<ProjectMeeting>, sqlx::Error> {
        let query = format!(
            "UPDATE project_meetings SET
                meeting_date_time = COALESCE($2, meeting_date_time),
                purpose = COALESCE($3, purpose),
                location = COALESCE($4, location),
                notes = COALESCE($5, notes),
                status = COALESCE($6, status),
                status_description = COALESCE($7, status_description),
                status_date_time = CASE WHEN $6::TEXT IS NULL THEN status_date_time ELSE NOW() END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMeeting>(&query)
            .bind(id)
            .bind(input.meeting_date_time)
            .bind(&input.purpose)
            .bind(&input.location)
            .bind(&input.notes)
            .bind(status.map(MeetingStatus::as_str))
            .bind(&input.status_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a meeting and, by cascade, its attendance rows.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_meetings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
