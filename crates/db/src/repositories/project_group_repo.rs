//! Repository for the `project_groups` table.

use spms_core::approval::{self, GroupStatus, Transition};
use spms_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::project_group::{
    CreateProjectGroup, ProjectGroup, ProjectGroupDetail, ProjectGroupFilter,
    ProjectGroupSummary, UpdateProjectGroup,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_type_id, guide_staff_id, convener_staff_id, \
                       expert_staff_id, title, area, description, average_cpi, status, \
                       created_at, updated_at";

/// Member count subquery for the joined read models.
const MEMBERS_COUNT: &str =
    "(SELECT COUNT(*) FROM project_group_members m WHERE m.project_group_id = g.id)";

/// Result of a successful [`ProjectGroupRepo::update_status`] call.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub group: ProjectGroup,
    pub transition: Transition,
}

/// Provides CRUD operations and the approval transition for project groups.
pub struct ProjectGroupRepo;

impl ProjectGroupRepo {
    /// Insert a new project group with the given initial status.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectGroup,
        status: GroupStatus,
    ) -> Result<ProjectGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_groups
                (name, project_type_id, guide_staff_id, convener_staff_id, expert_staff_id,
                 title, area, description, average_cpi, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 0), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectGroup>(&query)
            .bind(&input.name)
            .bind(input.project_type_id)
            .bind(input.guide_staff_id)
            .bind(input.convener_staff_id)
            .bind(input.expert_staff_id)
            .bind(&input.title)
            .bind(&input.area)
            .bind(&input.description)
            .bind(input.average_cpi)
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_groups WHERE id = $1");
        sqlx::query_as::<_, ProjectGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a group with its type, guide, convener and expert names and
    /// current member count.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectGroupDetail>, sqlx::Error> {
        let query = format!(
            "SELECT g.id, g.name,
                    g.project_type_id, pt.name AS project_type_name,
                    g.guide_staff_id, gs.name AS guide_name,
                    g.convener_staff_id, cs.name AS convener_name,
                    g.expert_staff_id, es.name AS expert_name,
                    g.title, g.area, g.description, g.average_cpi,
                    {MEMBERS_COUNT} AS members_count,
                    g.status, g.created_at, g.updated_at
             FROM project_groups g
             JOIN project_types pt ON pt.id = g.project_type_id
             JOIN staff gs ON gs.id = g.guide_staff_id
             LEFT JOIN staff cs ON cs.id = g.convener_staff_id
             LEFT JOIN staff es ON es.id = g.expert_staff_id
             WHERE g.id = $1"
        );
        sqlx::query_as::<_, ProjectGroupDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List group summaries, newest first.
    ///
    /// `staff_id` matches groups where that staff member is guide, convener
    /// or expert.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectGroupFilter,
    ) -> Result<Vec<ProjectGroupSummary>, sqlx::Error> {
        let query = format!(
            "SELECT g.id, g.name, g.title, g.area,
                    g.project_type_id, pt.name AS project_type_name,
                    g.guide_staff_id, gs.name AS guide_name,
                    g.average_cpi,
                    {MEMBERS_COUNT} AS members_count,
                    g.status, g.created_at
             FROM project_groups g
             JOIN project_types pt ON pt.id = g.project_type_id
             JOIN staff gs ON gs.id = g.guide_staff_id
             WHERE ($1::TEXT IS NULL OR g.status = $1)
               AND ($2::BIGINT IS NULL OR g.project_type_id = $2)
               AND ($3::BIGINT IS NULL
                    OR g.guide_staff_id = $3
                    OR g.convener_staff_id = $3
                    OR g.expert_staff_id = $3)
             ORDER BY g.created_at DESC, g.id DESC"
        );
        sqlx::query_as::<_, ProjectGroupSummary>(&query)
            .bind(&filter.status)
            .bind(filter.project_type_id)
            .bind(filter.staff_id)
            .fetch_all(pool)
            .await
    }

    /// Update descriptive fields. Only fields present in `input` are applied;
    /// an explicit `null` clears convener, expert, area or description.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectGroup,
    ) -> Result<Option<ProjectGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE project_groups SET
                name = COALESCE($2, name),
                project_type_id = COALESCE($3, project_type_id),
                guide_staff_id = COALESCE($4, guide_staff_id),
                convener_staff_id = CASE WHEN $5 THEN $6 ELSE convener_staff_id END,
                expert_staff_id = CASE WHEN $7 THEN $8 ELSE expert_staff_id END,
                title = COALESCE($9, title),
                area = CASE WHEN $10 THEN $11 ELSE area END,
                description = CASE WHEN $12 THEN $13 ELSE description END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectGroup>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.project_type_id)
            .bind(input.guide_staff_id)
            .bind(input.convener_staff_id.is_some())
            .bind(input.convener_staff_id.flatten())
            .bind(input.expert_staff_id.is_some())
            .bind(input.expert_staff_id.flatten())
            .bind(&input.title)
            .bind(input.area.is_some())
            .bind(input.area.as_ref().and_then(|v| v.as_deref()))
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Apply an approval transition.
    ///
    /// The group row is locked for the duration of the check so two approvers
    /// racing on the same group are serialized. Returns `Ok(None)` if no group
    /// has the given `id`; a disallowed move yields a `Conflict`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        target: GroupStatus,
    ) -> Result<Option<StatusChange>, DbError> {
        let mut tx = pool.begin().await?;

        let current: Option<String> =
            sqlx::query_scalar("SELECT status FROM project_groups WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        let transition = approval::transition(current.parse()?, target)?;

        let query = format!(
            "UPDATE project_groups SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let group = sqlx::query_as::<_, ProjectGroup>(&query)
            .bind(id)
            .bind(target.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(StatusChange { group, transition }))
    }

    /// Delete a group. Its members, meetings and their attendance are
    /// removed by `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
