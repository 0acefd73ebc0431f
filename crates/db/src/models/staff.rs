//! Staff entity model and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A staff row from the `staff` table.
///
/// Staff act as guide, convener or expert of a project group.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub email: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaff {
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStaff {
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Name must not be blank"))]
    pub name: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    pub description: Option<String>,
}
