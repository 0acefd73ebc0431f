//! Route definitions for the `/project-groups` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_group;
use crate::state::AppState;

/// Routes mounted at `/project-groups`.
///
/// `/mine` is registered as a static segment so it takes precedence over
/// `/{id}`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /mine           -> mine
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update_status
/// PATCH  /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/members   -> list_members
/// POST   /{id}/members   -> add_members
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_group::list).post(project_group::create))
        .route("/mine", get(project_group::mine))
        .route(
            "/{id}",
            get(project_group::get_by_id)
                .put(project_group::update_status)
                .patch(project_group::update)
                .delete(project_group::delete),
        )
        .route(
            "/{id}/members",
            get(project_group::list_members).post(project_group::add_members),
        )
}
