//! Route definitions for the `/project-group-members` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_group_member;
use crate::state::AppState;

/// Routes mounted at `/project-group-members`.
///
/// ```text
/// GET    /?group_id=   -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project_group_member::list).post(project_group_member::create),
        )
        .route(
            "/{id}",
            get(project_group_member::get_by_id)
                .put(project_group_member::update)
                .delete(project_group_member::delete),
        )
}
