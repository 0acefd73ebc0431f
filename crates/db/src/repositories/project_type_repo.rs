//! Repository for the `project_types` table.

use spms_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_type::{CreateProjectType, ProjectType, UpdateProjectType};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct ProjectTypeRepo;

impl ProjectTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectType,
    ) -> Result<ProjectType, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_types (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_types WHERE id = $1");
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_types ORDER BY name, id");
        sqlx::query_as::<_, ProjectType>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectType,
    ) -> Result<Option<ProjectType>, sqlx::Error> {
        let query = format!(
            "UPDATE project_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project type. Returns `true` if a row was removed.
    ///
    /// The `project_groups.project_type_id` foreign key is `RESTRICT`, so a
    /// type still used by a group fails with a foreign-key violation.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
