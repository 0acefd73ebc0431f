//! Repository for the `project_group_members` table.
//!
//! Every roster write runs in a transaction that locks the owning group row
//! and rewrites `project_groups.average_cpi` before committing, so the stored
//! average always matches the committed roster.

use spms_core::cpi::average_cpi;
use spms_core::error::CoreError;
use spms_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::DbError;
use crate::models::project_group_member::{
    NewGroupMember, ProjectGroupMember, ProjectGroupMemberWithStudent, UpdateProjectGroupMember,
};

const COLUMNS: &str = "id, project_group_id, student_id, is_group_leader, cgpa, description, \
                       created_at, updated_at";

/// Provides roster maintenance and CPI aggregation for project groups.
pub struct ProjectGroupMemberRepo;

impl ProjectGroupMemberRepo {
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectGroupMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_group_members WHERE id = $1");
        sqlx::query_as::<_, ProjectGroupMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a group's roster, leader first, then by student name.
    pub async fn list_by_group(
        pool: &PgPool,
        project_group_id: DbId,
    ) -> Result<Vec<ProjectGroupMemberWithStudent>, sqlx::Error> {
        sqlx::query_as::<_, ProjectGroupMemberWithStudent>(
            "SELECT m.id, m.project_group_id, m.student_id,
                    s.name AS student_name, s.email AS student_email,
                    m.is_group_leader, m.cgpa, m.description, m.created_at
             FROM project_group_members m
             JOIN students s ON s.id = m.student_id
             WHERE m.project_group_id = $1
             ORDER BY m.is_group_leader DESC, s.name, m.id",
        )
        .bind(project_group_id)
        .fetch_all(pool)
        .await
    }

    /// Add one member to a group and recompute the group's average CPI.
    pub async fn add(
        pool: &PgPool,
        project_group_id: DbId,
        member: &NewGroupMember,
    ) -> Result<ProjectGroupMember, DbError> {
        let mut tx = pool.begin().await?;
        lock_group(&mut tx, project_group_id).await?;
        let row = insert_member(&mut tx, project_group_id, member).await?;
        recompute_average_cpi(&mut tx, project_group_id).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Add several members at once. Either all are added or none are.
    pub async fn add_many(
        pool: &PgPool,
        project_group_id: DbId,
        members: &[NewGroupMember],
    ) -> Result<Vec<ProjectGroupMember>, DbError> {
        let mut tx = pool.begin().await?;
        lock_group(&mut tx, project_group_id).await?;

        let mut rows = Vec::with_capacity(members.len());
        for member in members {
            rows.push(insert_member(&mut tx, project_group_id, member).await?);
        }

        recompute_average_cpi(&mut tx, project_group_id).await?;
        tx.commit().await?;
        Ok(rows)
    }

    /// Update a member. Promoting a member to leader demotes the current
    /// leader of the same group.
    ///
    /// Returns `Ok(None)` if no member has the given `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectGroupMember,
    ) -> Result<Option<ProjectGroupMember>, DbError> {
        let mut tx = pool.begin().await?;
        let Some(project_group_id) = owning_group(&mut tx, id).await? else {
            return Ok(None);
        };
        lock_group(&mut tx, project_group_id).await?;

        if input.is_group_leader == Some(true) {
            sqlx::query(
                "UPDATE project_group_members SET is_group_leader = false
                 WHERE project_group_id = $1 AND id <> $2 AND is_group_leader",
            )
            .bind(project_group_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        let query = format!(
            "UPDATE project_group_members SET
                is_group_leader = COALESCE($2, is_group_leader),
                cgpa = COALESCE($3, cgpa),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectGroupMember>(&query)
            .bind(id)
            .bind(input.is_group_leader)
            .bind(input.cgpa)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        recompute_average_cpi(&mut tx, project_group_id).await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    /// Remove a member and recompute the group's average CPI.
    ///
    /// Returns `true` if a row was removed.
    pub async fn remove(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let mut tx = pool.begin().await?;
        let Some(project_group_id) = owning_group(&mut tx, id).await? else {
            return Ok(false);
        };
        lock_group(&mut tx, project_group_id).await?;

        let result = sqlx::query("DELETE FROM project_group_members WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        recompute_average_cpi(&mut tx, project_group_id).await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Lock the group row, failing with `NotFound` if it does not exist.
async fn lock_group(
    tx: &mut Transaction<'_, Postgres>,
    project_group_id: DbId,
) -> Result<(), DbError> {
    let found: Option<DbId> =
        sqlx::query_scalar("SELECT id FROM project_groups WHERE id = $1 FOR UPDATE")
            .bind(project_group_id)
            .fetch_optional(&mut **tx)
            .await?;
    match found {
        Some(_) => Ok(()),
        None => Err(CoreError::NotFound {
            entity: "ProjectGroup",
            id: project_group_id,
        }
        .into()),
    }
}

async fn owning_group(
    tx: &mut Transaction<'_, Postgres>,
    member_id: DbId,
) -> Result<Option<DbId>, sqlx::Error> {
    sqlx::query_scalar("SELECT project_group_id FROM project_group_members WHERE id = $1")
        .bind(member_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Insert a member row, snapshotting the student's cgpa when none is given.
///
/// A missing student is `NotFound` whether or not a cgpa was supplied.
async fn insert_member(
    tx: &mut Transaction<'_, Postgres>,
    project_group_id: DbId,
    member: &NewGroupMember,
) -> Result<ProjectGroupMember, DbError> {
    let student_cgpa = sqlx::query_scalar::<_, f64>("SELECT cgpa FROM students WHERE id = $1")
        .bind(member.student_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Student",
            id: member.student_id,
        })?;
    let cgpa = member.cgpa.unwrap_or(student_cgpa);

    let query = format!(
        "INSERT INTO project_group_members
            (project_group_id, student_id, is_group_leader, cgpa, description)
         VALUES ($1, $2, COALESCE($3, false), $4, $5)
         RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, ProjectGroupMember>(&query)
        .bind(project_group_id)
        .bind(member.student_id)
        .bind(member.is_group_leader)
        .bind(cgpa)
        .bind(&member.description)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row)
}

/// Rewrite the group's `average_cpi` from its current roster.
async fn recompute_average_cpi(
    tx: &mut Transaction<'_, Postgres>,
    project_group_id: DbId,
) -> Result<f64, sqlx::Error> {
    let cgpas: Vec<f64> =
        sqlx::query_scalar("SELECT cgpa FROM project_group_members WHERE project_group_id = $1")
            .bind(project_group_id)
            .fetch_all(&mut **tx)
            .await?;
    let average = average_cpi(&cgpas);

    sqlx::query("UPDATE project_groups SET average_cpi = $2 WHERE id = $1")
        .bind(project_group_id)
        .bind(average)
        .execute(&mut **tx)
        .await?;

    tracing::debug!(
        project_group_id,
        members = cgpas.len(),
        average_cpi = average,
        "Recomputed group average CPI"
    );
    Ok(average)
}
