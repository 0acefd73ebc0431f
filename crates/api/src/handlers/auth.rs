//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use spms_core::error::CoreError;
use spms_core::roles::validate_role;
use spms_core::types::DbId;
use spms_db::repositories::UserLoginRepo;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Email is required"))]
    pub email: String,
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Password is required"))]
    pub password: String,
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Role is required"))]
    pub role: String,
}

/// Successful login response. `success` and `user` keep the shape the
/// dashboard client already reads.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserInfo,
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub role: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email, password and role. The login must be active and
/// carry exactly the requested role.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_role(&input.role).map_err(AppError::BadRequest)?;

    let login = UserLoginRepo::find_active(&state.pool, &input.email, &input.role)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or role".into()))
        })?;

    let password_valid = verify_password(&input.password, &login.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(login_id = login.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    UserLoginRepo::record_login(&state.pool, login.id).await?;

    let access_token = generate_access_token(login.id, &login.role, &login.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(login_id = login.id, role = %login.role, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        user: UserInfo {
            id: login.id,
            role: login.role,
            email: login.email,
        },
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
    }))
}

/// GET /api/v1/auth/me
///
/// Echo the caller's identity from their token.
pub async fn me(RequireAuth(user): RequireAuth) -> Json<DataResponse<UserInfo>> {
    Json(DataResponse {
        data: UserInfo {
            id: user.user_id,
            role: user.role,
            email: user.email,
        },
    })
}
