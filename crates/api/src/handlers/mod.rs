pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod meeting_attendance;
pub mod project_group;
pub mod project_group_member;
pub mod project_meeting;
pub mod project_type;
pub mod staff;
pub mod student;
