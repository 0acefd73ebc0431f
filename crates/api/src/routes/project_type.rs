//! Route definitions for the `/project-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_type;
use crate::state::AppState;

/// Routes mounted at `/project-types`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project_type::list).post(project_type::create))
        .route(
            "/{id}",
            get(project_type::get_by_id).put(project_type::update).delete(project_type::delete),
        )
}
