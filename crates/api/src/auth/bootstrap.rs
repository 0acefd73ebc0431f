//! First-admin provisioning.

use spms_core::roles::ROLE_ADMIN;
use spms_db::models::user_login::CreateUserLogin;
use spms_db::repositories::UserLoginRepo;
use spms_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create an admin login from `admin` if no active admin exists.
///
/// Returns `true` when a login was created.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserLoginRepo::any_active_with_role(pool, ROLE_ADMIN).await? {
        return Ok(false);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(AppError::BadRequest)?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let login = UserLoginRepo::create(
        pool,
        &CreateUserLogin {
            user_id: None,
            role: ROLE_ADMIN.to_string(),
            email: admin.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(login_id = login.id, email = %login.email, "Bootstrap admin login created");
    Ok(true)
}
