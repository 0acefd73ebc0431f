//! Shared query parameter types for API handlers.
//!
//! Parameter names accept both `snake_case` and the `camelCase` spelling
//! used by the dashboard client.

use serde::Deserialize;
use spms_core::error::CoreError;
use spms_core::types::DbId;

/// `?group_id=` (or `?groupId=`) for roster listings.
#[derive(Debug, Deserialize)]
pub struct GroupIdParams {
    #[serde(alias = "groupId", alias = "project_group_id")]
    pub group_id: Option<DbId>,
}

impl GroupIdParams {
    pub fn require(&self) -> Result<DbId, CoreError> {
        self.group_id.ok_or_else(|| {
            CoreError::Validation("group_id query parameter is required".into())
        })
    }
}

/// `?meeting_id=` (or `?meetingId=`) for attendance listings.
#[derive(Debug, Deserialize)]
pub struct MeetingIdParams {
    #[serde(alias = "meetingId", alias = "project_meeting_id")]
    pub meeting_id: Option<DbId>,
}

impl MeetingIdParams {
    pub fn require(&self) -> Result<DbId, CoreError> {
        self.meeting_id.ok_or_else(|| {
            CoreError::Validation("meeting_id query parameter is required".into())
        })
    }
}
