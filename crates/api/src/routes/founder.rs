//! Route definitions for the `/founders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::founder;
use crate::state::AppState;

/// Routes mounted at `/founders`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// POST   /with-client  -> create_with_client
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(founder::list).post(founder::create))
        .route("/with-client", post(founder::create_with_client))
        .route(
            "/{id}",
            get(founder::get_by_id)
                .put(founder::update)
                .delete(founder::delete),
        )
}
