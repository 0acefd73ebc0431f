//! Handlers for the `/project-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spms_core::error::CoreError;
use spms_core::types::DbId;
use spms_db::models::project_type::{CreateProjectType, ProjectType, UpdateProjectType};
use spms_db::repositories::ProjectTypeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// POST /api/v1/project-types
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProjectType>,
) -> AppResult<(StatusCode, Json<ProjectType>)> {
    let project_type = ProjectTypeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        admin_id = admin.user_id,
        project_type_id = project_type.id,
        name = %project_type.name,
        "Project type created"
    );
    Ok((StatusCode::CREATED, Json(project_type)))
}

/// GET /api/v1/project-types
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectType>>> {
    let types = ProjectTypeRepo::list(&state.pool).await?;
    Ok(Json(types))
}

/// GET /api/v1/project-types/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectType>> {
    let project_type = ProjectTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectType",
            id,
        }))?;
    Ok(Json(project_type))
}

/// PUT /api/v1/project-types/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProjectType>,
) -> AppResult<Json<ProjectType>> {
    let project_type = ProjectTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectType",
            id,
        }))?;
    Ok(Json(project_type))
}

/// DELETE /api/v1/project-types/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(admin_id = admin.user_id, project_type_id = id, "Project type deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectType",
            id,
        }))
    }
}
