//! Project group member model and DTOs.

use serde::{Deserialize, Serialize};
use spms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `project_group_members` table.
///
/// `cgpa` is a snapshot of the student's cgpa when the member was added.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectGroupMember {
    pub id: DbId,
    pub project_group_id: DbId,
    pub student_id: DbId,
    pub is_group_leader: bool,
    pub cgpa: f64,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Roster row: a member joined with the student's name and email.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectGroupMemberWithStudent {
    pub id: DbId,
    pub project_group_id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub student_email: String,
    pub is_group_leader: bool,
    pub cgpa: f64,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// A member to add to a known group.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewGroupMember {
    #[serde(alias = "studentId")]
    pub student_id: DbId,
    /// Defaults to `false`.
    #[serde(alias = "isGroupLeader")]
    pub is_group_leader: Option<bool>,
    /// Copied from the student record when omitted.
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10"))]
    pub cgpa: Option<f64>,
    pub description: Option<String>,
}

/// Body of `POST /project-group-members`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectGroupMember {
    #[serde(alias = "groupId")]
    pub project_group_id: DbId,
    #[serde(alias = "studentId")]
    pub student_id: DbId,
    #[serde(alias = "isGroupLeader")]
    pub is_group_leader: Option<bool>,
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10"))]
    pub cgpa: Option<f64>,
    pub description: Option<String>,
}

impl CreateProjectGroupMember {
    /// Split into the target group id and the member to add.
    pub fn into_parts(self) -> (DbId, NewGroupMember) {
        (
            self.project_group_id,
            NewGroupMember {
                student_id: self.student_id,
                is_group_leader: self.is_group_leader,
                cgpa: self.cgpa,
                description: self.description,
            },
        )
    }
}

/// Body of `POST /project-groups/{id}/members` (bulk add).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddGroupMembers {
    #[validate(length(min = 1, message = "At least one member is required"), nested)]
    pub members: Vec<NewGroupMember>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectGroupMember {
    #[serde(alias = "isGroupLeader")]
    pub is_group_leader: Option<bool>,
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10"))]
    pub cgpa: Option<f64>,
    pub description: Option<String>,
}
