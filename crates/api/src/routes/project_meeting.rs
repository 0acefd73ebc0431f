//! Route definitions for the `/project-meetings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project_meeting;
use crate::state::AppState;

/// Routes mounted at `/project-meetings`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/attendance  -> record_attendance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_meeting::list).post(project_meeting::create))
        .route(
            "/{id}",
            get(project_meeting::get_by_id)
                .put(project_meeting::update)
                .delete(project_meeting::delete),
        )
        .route("/{id}/attendance", post(project_meeting::record_attendance))
}
