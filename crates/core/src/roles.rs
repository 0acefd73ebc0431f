//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `user_logins.role`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_FACULTY: &str = "faculty";
pub const ROLE_STUDENT: &str = "student";

/// All roles a login may carry.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_FACULTY, ROLE_STUDENT];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

/// Whether the role may approve or reject project groups and run meetings.
pub fn is_approver(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_FACULTY
}
