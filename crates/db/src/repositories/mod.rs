//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod meeting_attendance_repo;
pub mod project_group_member_repo;
pub mod project_group_repo;
pub mod project_meeting_repo;
pub mod project_type_repo;
pub mod staff_repo;
pub mod student_repo;
pub mod user_login_repo;

pub use dashboard_repo::DashboardRepo;
pub use meeting_attendance_repo::MeetingAttendanceRepo;
pub use project_group_member_repo::ProjectGroupMemberRepo;
pub use project_group_repo::{ProjectGroupRepo, StatusChange};
pub use project_meeting_repo::ProjectMeetingRepo;
pub use project_type_repo::ProjectTypeRepo;
pub use staff_repo::StaffRepo;
pub use student_repo::StudentRepo;
pub use user_login_repo::UserLoginRepo;
