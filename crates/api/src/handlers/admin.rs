//! Admin-only login management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use spms_core::error::CoreError;
use spms_core::roles::validate_role;
use spms_core::types::DbId;
use spms_db::models::user_login::{CreateUserLogin, UserLoginResponse};
use spms_db::repositories::UserLoginRepo;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    pub password: String,
    pub role: String,
    /// Student or staff id the login belongs to.
    pub user_id: Option<DbId>,
}

/// Request body for `PUT /admin/users/{id}/active`.
#[derive(Debug, Deserialize, Validate)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// GET /api/v1/admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserLoginResponse>>> {
    let logins = UserLoginRepo::list(&state.pool).await?;
    Ok(Json(logins.into_iter().map(UserLoginResponse::from).collect()))
}

/// POST /api/v1/admin/users
///
/// Create a login. The password is hashed before it reaches the database.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserLoginResponse>)> {
    validate_role(&input.role).map_err(AppError::BadRequest)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(AppError::BadRequest)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let login = UserLoginRepo::create(
        &state.pool,
        &CreateUserLogin {
            user_id: input.user_id,
            role: input.role,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(
        admin_id = admin.user_id,
        login_id = login.id,
        role = %login.role,
        "Login created"
    );

    Ok((StatusCode::CREATED, Json(login.into())))
}

/// PUT /api/v1/admin/users/{id}/active
pub async fn set_active(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<SetActiveRequest>,
) -> AppResult<Json<UserLoginResponse>> {
    let login = UserLoginRepo::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserLogin",
            id,
        }))?;

    tracing::info!(
        admin_id = admin.user_id,
        login_id = id,
        is_active = input.is_active,
        "Login activation changed"
    );

    Ok(Json(login.into()))
}
