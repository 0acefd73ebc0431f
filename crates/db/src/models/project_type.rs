//! Project type entity model and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A project type row from the `project_types` table (e.g. "Capstone").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectType {
    #[validate(
        length(min = 2, message = "Name must be at least 2 characters"),
        custom(function = "spms_core::validation::not_blank", message = "Name must not be blank")
    )]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectType {
    #[validate(
        length(min = 2, message = "Name must be at least 2 characters"),
        custom(function = "spms_core::validation::not_blank", message = "Name must not be blank")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
}
