//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use spms_core::error::CoreError;
use spms_core::types::DbId;
use spms_db::models::student::{CreateStudent, Student, UpdateStudent};
use spms_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// POST /api/v1/students
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.user_id, student_id = student.id, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// PUT /api/v1/students/{id}
///
/// Existing group memberships keep their CGPA snapshot.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StudentRepo::delete(&state.pool, id).await? {
        tracing::info!(admin_id = admin.user_id, student_id = id, "Student deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))
    }
}
