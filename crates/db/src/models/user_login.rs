//! User login model and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `user_logins` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserLoginResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct UserLogin {
    pub id: DbId,
    /// Student or staff id this login belongs to, depending on `role`.
    pub user_id: Option<DbId>,
    pub role: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe login representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserLoginResponse {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub role: String,
    pub email: String,
    pub is_active: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<UserLogin> for UserLoginResponse {
    fn from(login: UserLogin) -> Self {
        Self {
            id: login.id,
            user_id: login.user_id,
            role: login.role,
            email: login.email,
            is_active: login.is_active,
            last_login: login.last_login,
            created_at: login.created_at,
        }
    }
}

/// DTO for inserting a login. The password must already be hashed.
#[derive(Debug, Deserialize)]
pub struct CreateUserLogin {
    pub user_id: Option<DbId>,
    pub role: String,
    pub email: String,
    pub password_hash: String,
}
