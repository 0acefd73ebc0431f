//! Repository for the `project_meeting_attendance` table.

use spms_core::meeting::MeetingStatus;
use spms_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::meeting_attendance::{
    AttendanceEntry, CreateMeetingAttendance, MeetingAttendance, MeetingAttendanceWithStudent,
    RecordAttendance,
};
use crate::models::project_meeting::ProjectMeeting;
use crate::repositories::project_meeting_repo;

const COLUMNS: &str = "id, project_meeting_id, student_id, is_present, remarks, description, \
                       created_at, updated_at";

pub struct MeetingAttendanceRepo;

impl MeetingAttendanceRepo {
    /// List attendance for a meeting ordered by student name.
    pub async fn list_by_meeting(
        pool: &PgPool,
        project_meeting_id: DbId,
    ) -> Result<Vec<MeetingAttendanceWithStudent>, sqlx::Error> {
        sqlx::query_as::<_, MeetingAttendanceWithStudent>(
            "SELECT a.id, a.project_meeting_id, a.student_id, s.name AS student_name,
                    a.is_present, a.remarks, a.description
             FROM project_meeting_attendance a
             JOIN students s ON s.id = a.student_id
             WHERE a.project_meeting_id = $1
             ORDER BY s.name, a.id",
        )
        .bind(project_meeting_id)
        .fetch_all(pool)
        .await
    }

    /// Record one student's attendance, replacing any earlier entry for the
    /// same meeting.
    pub async fn upsert(
        pool: &PgPool,
        input: &CreateMeetingAttendance,
    ) -> Result<MeetingAttendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_meeting_attendance
                (project_meeting_id, student_id, is_present, remarks, description)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (project_meeting_id, student_id) DO UPDATE SET
                is_present = EXCLUDED.is_present,
                remarks = EXCLUDED.remarks,
                description = EXCLUDED.description
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingAttendance>(&query)
            .bind(input.project_meeting_id)
            .bind(input.student_id)
            .bind(input.is_present)
            .bind(&input.remarks)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Record attendance for every entry and mark the meeting `completed`,
    /// all in one transaction.
    ///
    /// Returns `None` if the meeting does not exist.
    pub async fn record_for_meeting(
        pool: &PgPool,
        project_meeting_id: DbId,
        input: &RecordAttendance,
    ) -> Result<Option<(ProjectMeeting, Vec<MeetingAttendance>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM project_meetings WHERE id = $1 FOR UPDATE")
                .bind(project_meeting_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let mut rows = Vec::with_capacity(input.entries.len());
        for entry in &input.entries {
            rows.push(upsert_entry(&mut tx, project_meeting_id, entry).await?);
        }

        let query = format!(
            "UPDATE project_meetings SET
                status = $2,
                status_description = COALESCE($3, status_description),
                status_date_time = NOW()
             WHERE id = $1
             RETURNING {}",
            project_meeting_repo::COLUMNS
        );
        let meeting = sqlx::query_as::<_, ProjectMeeting>(&query)
            .bind(project_meeting_id)
            .bind(MeetingStatus::Completed.as_str())
            .bind(&input.status_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((meeting, rows)))
    }
}

async fn upsert_entry(
    tx: &mut Transaction<'_, Postgres>,
    project_meeting_id: DbId,
    entry: &AttendanceEntry,
) -> Result<MeetingAttendance, sqlx::Error> {
    let query = format!(
        "INSERT INTO project_meeting_attendance
            (project_meeting_id, student_id, is_present, remarks)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (project_meeting_id, student_id) DO UPDATE SET
            is_present = EXCLUDED.is_present,
            remarks = EXCLUDED.remarks
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, MeetingAttendance>(&query)
        .bind(project_meeting_id)
        .bind(entry.student_id)
        .bind(entry.is_present)
        .bind(&entry.remarks)
        .fetch_one(&mut **tx)
        .await
}
