//! Project group entity model, joined read models, and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use super::double_option;

/// A project group row from the `project_groups` table.
///
/// `average_cpi` is derived from the member roster and rewritten by
/// [`crate::repositories::ProjectGroupMemberRepo`] on every roster change.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectGroup {
    pub id: DbId,
    pub name: String,
    pub project_type_id: DbId,
    pub guide_staff_id: DbId,
    pub convener_staff_id: Option<DbId>,
    pub expert_staff_id: Option<DbId>,
    pub title: String,
    pub area: Option<String>,
    pub description: Option<String>,
    pub average_cpi: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List-view row: a group with its type name, guide name and member count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectGroupSummary {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub area: Option<String>,
    pub project_type_id: DbId,
    pub project_type_name: String,
    pub guide_staff_id: DbId,
    pub guide_name: String,
    pub average_cpi: f64,
    pub members_count: i64,
    pub status: String,
    pub created_at: Timestamp,
}

/// Detail-view row: every group column plus all resolved names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectGroupDetail {
    pub id: DbId,
    pub name: String,
    pub project_type_id: DbId,
    pub project_type_name: String,
    pub guide_staff_id: DbId,
    pub guide_name: String,
    pub convener_staff_id: Option<DbId>,
    pub convener_name: Option<String>,
    pub expert_staff_id: Option<DbId>,
    pub expert_name: Option<String>,
    pub title: String,
    pub area: Option<String>,
    pub description: Option<String>,
    pub average_cpi: f64,
    pub members_count: i64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project group.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectGroup {
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(alias = "projectTypeId")]
    pub project_type_id: DbId,
    #[serde(alias = "guideStaffId")]
    pub guide_staff_id: DbId,
    #[serde(alias = "convenerStaffId")]
    pub convener_staff_id: Option<DbId>,
    #[serde(alias = "expertStaffId")]
    pub expert_staff_id: Option<DbId>,
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Title is required"))]
    pub title: String,
    pub area: Option<String>,
    pub description: Option<String>,
    /// Kept until the first roster write recomputes it. Defaults to 0.
    #[validate(range(min = 0.0, max = 10.0, message = "Average CPI must be between 0 and 10"))]
    #[serde(alias = "averageCPI")]
    pub average_cpi: Option<f64>,
    /// Defaults to `pending` if omitted.
    pub status: Option<String>,
}

/// DTO for editing a group's descriptive fields. Status is changed only
/// through [`UpdateProjectGroupStatus`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectGroup {
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Name must not be blank"))]
    pub name: Option<String>,
    #[serde(alias = "projectTypeId")]
    pub project_type_id: Option<DbId>,
    #[serde(alias = "guideStaffId")]
    pub guide_staff_id: Option<DbId>,
    /// `null` unassigns the convener.
    #[serde(alias = "convenerStaffId", default, deserialize_with = "double_option")]
    pub convener_staff_id: Option<Option<DbId>>,
    /// `null` unassigns the expert.
    #[serde(alias = "expertStaffId", default, deserialize_with = "double_option")]
    pub expert_staff_id: Option<Option<DbId>>,
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Title must not be blank"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub area: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

/// Body of `PUT /project-groups/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectGroupStatus {
    pub status: String,
}

/// Query parameters for `GET /project-groups`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectGroupFilter {
    pub status: Option<String>,
    #[serde(alias = "projectTypeId")]
    pub project_type_id: Option<DbId>,
    #[serde(alias = "staffId")]
    pub staff_id: Option<DbId>,
}
