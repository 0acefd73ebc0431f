//! Project meeting status values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const MEETING_SCHEDULED: &str = "scheduled";
pub const MEETING_COMPLETED: &str = "completed";
pub const MEETING_CANCELLED: &str = "cancelled";

pub const VALID_MEETING_STATUSES: &[&str] =
    &[MEETING_SCHEDULED, MEETING_COMPLETED, MEETING_CANCELLED];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => MEETING_SCHEDULED,
            MeetingStatus::Completed => MEETING_COMPLETED,
            MeetingStatus::Cancelled => MEETING_CANCELLED,
        }
    }
}

impl FromStr for MeetingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MEETING_SCHEDULED => Ok(MeetingStatus::Scheduled),
            MEETING_COMPLETED => Ok(MeetingStatus::Completed),
            MEETING_CANCELLED => Ok(MeetingStatus::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Invalid meeting status '{other}'. Must be one of: {}",
                VALID_MEETING_STATUSES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_known_values() {
        for value in VALID_MEETING_STATUSES {
            let status: MeetingStatus = value.parse().unwrap();
            assert_eq!(status.as_str(), *value);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!("postponed".parse::<MeetingStatus>().is_err());
    }
}
