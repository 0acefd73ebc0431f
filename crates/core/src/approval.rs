//! Project group admission workflow.
//!
//! A group starts `pending` and is moved once to `approved` or `rejected` by
//! an approver. [`transition`] is the only place that decides whether a
//! status change is allowed; the repository applies it under a row lock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// All valid group status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Pending,
    Approved,
    Rejected,
}

impl GroupStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupStatus::Pending => STATUS_PENDING,
            GroupStatus::Approved => STATUS_APPROVED,
            GroupStatus::Rejected => STATUS_REJECTED,
        }
    }

    /// `approved` and `rejected` have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GroupStatus::Pending)
    }
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(GroupStatus::Pending),
            STATUS_APPROVED => Ok(GroupStatus::Approved),
            STATUS_REJECTED => Ok(GroupStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

/// Outcome of an allowed status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The group moves from one status to another.
    Changed { from: GroupStatus, to: GroupStatus },
    /// The group already has the requested status.
    Unchanged(GroupStatus),
}

/// Decide whether `current -> target` is allowed.
///
/// Re-applying the current status is accepted as a no-op. Leaving a terminal
/// state, or returning a decided group to `pending`, is a conflict.
pub fn transition(current: GroupStatus, target: GroupStatus) -> Result<Transition, CoreError> {
    if current == target {
        return Ok(Transition::Unchanged(current));
    }
    if current.is_terminal() || target == GroupStatus::Pending {
        return Err(CoreError::Conflict(format!(
            "Project group is already {current} and cannot be moved to {target}"
        )));
    }
    Ok(Transition::Changed {
        from: current,
        to: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_valid_statuses() {
        assert_eq!("pending".parse::<GroupStatus>().unwrap(), GroupStatus::Pending);
        assert_eq!("approved".parse::<GroupStatus>().unwrap(), GroupStatus::Approved);
        assert_eq!("rejected".parse::<GroupStatus>().unwrap(), GroupStatus::Rejected);
    }

    #[test]
    fn test_parse_unknown_status_is_validation_error() {
        assert_matches!(
            "bogus".parse::<GroupStatus>(),
            Err(CoreError::Validation(msg)) if msg.contains("Invalid status 'bogus'")
        );
        assert_matches!("".parse::<GroupStatus>(), Err(CoreError::Validation(_)));
        assert_matches!("Approved".parse::<GroupStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_pending_can_be_approved_or_rejected() {
        assert_eq!(
            transition(GroupStatus::Pending, GroupStatus::Approved).unwrap(),
            Transition::Changed {
                from: GroupStatus::Pending,
                to: GroupStatus::Approved
            }
        );
        assert_matches!(
            transition(GroupStatus::Pending, GroupStatus::Rejected),
            Ok(Transition::Changed {
                to: GroupStatus::Rejected,
                ..
            })
        );
    }

    #[test]
    fn test_same_status_is_idempotent() {
        for status in [GroupStatus::Pending, GroupStatus::Approved, GroupStatus::Rejected] {
            assert_eq!(transition(status, status).unwrap(), Transition::Unchanged(status));
        }
    }

    #[test]
    fn test_terminal_states_cannot_move() {
        assert_matches!(
            transition(GroupStatus::Approved, GroupStatus::Rejected),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            transition(GroupStatus::Rejected, GroupStatus::Approved),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            transition(GroupStatus::Approved, GroupStatus::Pending),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn test_terminal_flags() {
        assert!(!GroupStatus::Pending.is_terminal());
        assert!(GroupStatus::Approved.is_terminal());
        assert!(GroupStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_display_matches_stored_value() {
        assert_eq!(GroupStatus::Approved.to_string(), "approved");
        assert_eq!(GroupStatus::Pending.as_str(), STATUS_PENDING);
    }
}
