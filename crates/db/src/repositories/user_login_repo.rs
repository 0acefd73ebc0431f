//! Repository for the `user_logins` table.

use spms_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_login::{CreateUserLogin, UserLogin};

const COLUMNS: &str = "id, user_id, role, email, password_hash, is_active, last_login, \
                       created_at, updated_at";

/// Provides lookups and maintenance for login credentials.
pub struct UserLoginRepo;

impl UserLoginRepo {
    /// Insert a login. `input.password_hash` must already be hashed.
    pub async fn create(pool: &PgPool, input: &CreateUserLogin) -> Result<UserLogin, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_logins (user_id, role, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserLogin>(&query)
            .bind(input.user_id)
            .bind(&input.role)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserLogin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_logins WHERE id = $1");
        sqlx::query_as::<_, UserLogin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active login by email (case-insensitive) and exact role.
    pub async fn find_active(
        pool: &PgPool,
        email: &str,
        role: &str,
    ) -> Result<Option<UserLogin>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_logins
             WHERE lower(email) = lower($1) AND role = $2 AND is_active"
        );
        sqlx::query_as::<_, UserLogin>(&query)
            .bind(email)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<UserLogin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_logins ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, UserLogin>(&query).fetch_all(pool).await
    }

    /// Whether any active login carries the given role.
    pub async fn any_active_with_role(pool: &PgPool, role: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM user_logins WHERE role = $1 AND is_active)")
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Activate or deactivate a login. Returns `None` if no row matched.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<UserLogin>, sqlx::Error> {
        let query = format!(
            "UPDATE user_logins SET is_active = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserLogin>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Stamp `last_login` with the current time.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE user_logins SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
