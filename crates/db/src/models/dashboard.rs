//! Read model for the dashboard landing page.

use serde::Serialize;
use sqlx::FromRow;

/// Headline counts shown on every role's dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardStats {
    pub students: i64,
    pub staff: i64,
    pub project_types: i64,
    pub groups_total: i64,
    pub groups_pending: i64,
    pub groups_approved: i64,
    pub groups_rejected: i64,
    pub upcoming_meetings: i64,
}
