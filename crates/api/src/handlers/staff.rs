//! Handlers for the `/staff` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spms_core::error::CoreError;
use spms_core::types::DbId;
use spms_db::models::staff::{CreateStaff, Staff, UpdateStaff};
use spms_db::repositories::StaffRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// POST /api/v1/staff
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    let staff = StaffRepo::create(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.user_id, staff_id = staff.id, "Staff member created");
    Ok((StatusCode::CREATED, Json(staff)))
}

/// GET /api/v1/staff
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Staff>>> {
    let staff = StaffRepo::list(&state.pool).await?;
    Ok(Json(staff))
}

/// GET /api/v1/staff/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Staff>> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    Ok(Json(staff))
}

/// PUT /api/v1/staff/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    let staff = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    Ok(Json(staff))
}

/// DELETE /api/v1/staff/{id}
///
/// Fails with 409 while the staff member guides, convenes or reviews a group.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StaffRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Staff", id }));
    }
    tracing::info!(admin_id = admin.user_id, staff_id = id, "Staff member deleted");
    Ok(StatusCode::NO_CONTENT)
}
