//! Student entity model and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub email: String,
    pub cgpa: f64,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10"))]
    pub cgpa: Option<f64>,
    pub description: Option<String>,
}

/// DTO for updating an existing student. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(custom(function = "spms_core::validation::not_blank", message = "Name must not be blank"))]
    pub name: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10"))]
    pub cgpa: Option<f64>,
    pub description: Option<String>,
}
