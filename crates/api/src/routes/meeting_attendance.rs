//! Route definitions for the `/project-meeting-attendance` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::meeting_attendance;
use crate::state::AppState;

/// ```text
/// GET    /?meeting_id=   -> list
/// POST   /               -> create (upsert)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(meeting_attendance::list).post(meeting_attendance::create),
    )
}
