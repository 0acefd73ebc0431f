pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod meeting_attendance;
pub mod project_group;
pub mod project_group_member;
pub mod project_meeting;
pub mod project_type;
pub mod staff;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/me                                         caller identity
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}/active                         activate / deactivate
///
/// /students                                        list, create
/// /students/{id}                                   get, update, delete
///
/// /staff                                           list, create
/// /staff/{id}                                      get, update, delete
///
/// /project-types                                   list, create
/// /project-types/{id}                              get, update, delete
///
/// /project-groups                                  list, create
/// /project-groups/mine                             caller's groups (faculty)
/// /project-groups/{id}                             get, status (PUT), edit (PATCH), delete
/// /project-groups/{id}/members                     roster, bulk add
///
/// /project-group-members                           list (?group_id=), add
/// /project-group-members/{id}                      get, update, remove
///
/// /project-meetings                                list, schedule
/// /project-meetings/{id}                           get, update, delete
/// /project-meetings/{id}/attendance                bulk record (POST)
///
/// /project-meeting-attendance                      list (?meeting_id=), record
///
/// /dashboard/stats                                 landing page counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/students", student::router())
        .nest("/staff", staff::router())
        .nest("/project-types", project_type::router())
        .nest("/project-groups", project_group::router())
        .nest("/project-group-members", project_group_member::router())
        .nest("/project-meetings", project_meeting::router())
        .nest("/project-meeting-attendance", meeting_attendance::router())
        .nest("/dashboard", dashboard::router())
}
