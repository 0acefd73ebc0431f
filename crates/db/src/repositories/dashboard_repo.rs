//! Aggregate counts for the dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Count entities and groups per status in a single round-trip.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM students) AS students,
                (SELECT COUNT(*) FROM staff) AS staff,
                (SELECT COUNT(*) FROM project_types) AS project_types,
                (SELECT COUNT(*) FROM project_groups) AS groups_total,
                (SELECT COUNT(*) FROM project_groups WHERE status = 'pending') AS groups_pending,
                (SELECT COUNT(*) FROM project_groups WHERE status = 'approved') AS groups_approved,
                (SELECT COUNT(*) FROM project_groups WHERE status = 'rejected') AS groups_rejected,
                (SELECT COUNT(*) FROM project_meetings
                  WHERE status = 'scheduled' AND meeting_date_time >= NOW()) AS upcoming_meetings",
        )
        .fetch_one(pool)
        .await
    }
}
