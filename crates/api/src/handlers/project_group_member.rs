//! Handlers for the `/project-group-members` resource.
//!
//! Every write here changes the owning group's average CPI; the repository
//! recomputes it in the same transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use spms_core::error::CoreError;
use spms_core::types::DbId;
use spms_db::models::project_group_member::{
    CreateProjectGroupMember, ProjectGroupMember, ProjectGroupMemberWithStudent,
    UpdateProjectGroupMember,
};
use spms_db::repositories::{ProjectGroupMemberRepo, ProjectGroupRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAuth;
use crate::query::GroupIdParams;
use crate::state::AppState;

fn member_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ProjectGroupMember",
        id,
    })
}

/// GET /api/v1/project-group-members?group_id=
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<GroupIdParams>,
) -> AppResult<Json<Vec<ProjectGroupMemberWithStudent>>> {
    let group_id = params.require()?;
    if ProjectGroupRepo::find_by_id(&state.pool, group_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectGroup",
            id: group_id,
        }));
    }
    let members = ProjectGroupMemberRepo::list_by_group(&state.pool, group_id).await?;
    Ok(Json(members))
}

/// POST /api/v1/project-group-members
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProjectGroupMember>,
) -> AppResult<(StatusCode, Json<ProjectGroupMember>)> {
    let (group_id, member) = input.into_parts();
    let row = ProjectGroupMemberRepo::add(&state.pool, group_id, &member).await?;
    tracing::info!(
        user_id = user.user_id,
        project_group_id = group_id,
        student_id = row.student_id,
        "Project group member added"
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/project-group-members/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectGroupMember>> {
    let member = ProjectGroupMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| member_not_found(id))?;
    Ok(Json(member))
}

/// PUT /api/v1/project-group-members/{id}
pub async fn update(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProjectGroupMember>,
) -> AppResult<Json<ProjectGroupMember>> {
    let member = ProjectGroupMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| member_not_found(id))?;
    Ok(Json(member))
}

/// DELETE /api/v1/project-group-members/{id}
pub async fn delete(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectGroupMemberRepo::remove(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, member_id = id, "Project group member removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(member_not_found(id))
    }
}
