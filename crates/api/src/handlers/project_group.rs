//! Handlers for the `/project-groups` resource.
//!
//! Creation is open to any authenticated user; the approval transition is
//! reserved for faculty and admins.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use spms_core::approval::{GroupStatus, Transition};
use spms_core::error::CoreError;
use spms_core::roles::is_approver;
use spms_core::types::DbId;
use spms_db::models::project_group::{
    CreateProjectGroup, ProjectGroup, ProjectGroupDetail, ProjectGroupFilter,
    ProjectGroupSummary, UpdateProjectGroup, UpdateProjectGroupStatus,
};
use spms_db::models::project_group_member::{
    AddGroupMembers, ProjectGroupMember, ProjectGroupMemberWithStudent,
};
use spms_db::repositories::{ProjectGroupMemberRepo, ProjectGroupRepo, StaffRepo, StatusChange};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireFaculty};
use crate::response::MessageResponse;
use crate::state::AppState;

fn group_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ProjectGroup",
        id,
    })
}

/// POST /api/v1/project-groups
///
/// New groups start `pending`. Only approvers may register a group directly
/// in another status.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProjectGroup>,
) -> AppResult<(StatusCode, Json<ProjectGroup>)> {
    let status = match input.status.as_deref() {
        None => GroupStatus::Pending,
        Some(raw) => raw.parse::<GroupStatus>()?,
    };
    if status != GroupStatus::Pending && !is_approver(&user.role) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only faculty or admin may set the initial status of a project group".into(),
        )));
    }

    let group = ProjectGroupRepo::create(&state.pool, &input, status).await?;

    tracing::info!(
        user_id = user.user_id,
        project_group_id = group.id,
        status = %group.status,
        "Project group created"
    );

    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /api/v1/project-groups
///
/// Optional filters: `status`, `project_type_id`, `staff_id`.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(filter): Query<ProjectGroupFilter>,
) -> AppResult<Json<Vec<ProjectGroupSummary>>> {
    if let Some(status) = filter.status.as_deref() {
        status.parse::<GroupStatus>()?;
    }
    let groups = ProjectGroupRepo::list(&state.pool, &filter).await?;
    Ok(Json(groups))
}

/// GET /api/v1/project-groups/mine
///
/// Groups the calling faculty member guides, convenes or reviews. The staff
/// record is matched on the login's email.
pub async fn mine(
    RequireFaculty(user): RequireFaculty,
    State(state): State<AppState>,
    Query(filter): Query<ProjectGroupFilter>,
) -> AppResult<Json<Vec<ProjectGroupSummary>>> {
    let staff = StaffRepo::find_by_email(&state.pool, &user.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No staff record is linked to this login".into(),
            ))
        })?;

    if let Some(status) = filter.status.as_deref() {
        status.parse::<GroupStatus>()?;
    }
    let filter = ProjectGroupFilter {
        staff_id: Some(staff.id),
        ..filter
    };
    let groups = ProjectGroupRepo::list(&state.pool, &filter).await?;
    Ok(Json(groups))
}

/// GET /api/v1/project-groups/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectGroupDetail>> {
    let group = ProjectGroupRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| group_not_found(id))?;
    Ok(Json(group))
}

/// PUT /api/v1/project-groups/{id}
///
/// Approve or reject a group. The requested status is checked before the
/// group is looked up, so a bad value is a 400 even for unknown ids.
pub async fn update_status(
    RequireFaculty(user): RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProjectGroupStatus>,
) -> AppResult<Json<MessageResponse<ProjectGroup>>> {
    let target: GroupStatus = input.status.trim().parse()?;

    let StatusChange { group, transition } =
        ProjectGroupRepo::update_status(&state.pool, id, target)
            .await?
            .ok_or_else(|| group_not_found(id))?;

    let message = match transition {
        Transition::Changed { from, to } => {
            tracing::info!(
                user_id = user.user_id,
                project_group_id = id,
                from = %from,
                to = %to,
                "Project group status changed"
            );
            format!("Project group status updated to {to}")
        }
        Transition::Unchanged(status) => format!("Project group is already {status}"),
    };

    Ok(Json(MessageResponse {
        message,
        data: group,
    }))
}

/// PATCH /api/v1/project-groups/{id}
///
/// Edit descriptive fields and staff assignments. Status is not touched.
pub async fn update(
    RequireFaculty(_user): RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProjectGroup>,
) -> AppResult<Json<ProjectGroup>> {
    let group = ProjectGroupRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| group_not_found(id))?;
    Ok(Json(group))
}

/// DELETE /api/v1/project-groups/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectGroupRepo::delete(&state.pool, id).await? {
        return Err(group_not_found(id));
    }
    tracing::info!(admin_id = admin.user_id, project_group_id = id, "Project group deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/project-groups/{id}/members
pub async fn list_members(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectGroupMemberWithStudent>>> {
    ProjectGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| group_not_found(id))?;
    let members = ProjectGroupMemberRepo::list_by_group(&state.pool, id).await?;
    Ok(Json(members))
}

/// POST /api/v1/project-groups/{id}/members
///
/// Add several members in one transaction.
pub async fn add_members(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<AddGroupMembers>,
) -> AppResult<(StatusCode, Json<Vec<ProjectGroupMember>>)> {
    let members = ProjectGroupMemberRepo::add_many(&state.pool, id, &input.members).await?;
    tracing::info!(
        user_id = user.user_id,
        project_group_id = id,
        count = members.len(),
        "Project group members added"
    );
    Ok((StatusCode::CREATED, Json(members)))
}
