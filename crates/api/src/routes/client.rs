//! Route definitions for the `/clients` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::client;
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// POST   /with-founder  -> create_with_founder
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route("/with-founder", post(client::create_with_founder))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
}
