pub mod client;
pub mod founder;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Prefix every resource route is nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                      list, create
/// /clients/with-founder         create around an existing free founder
/// /clients/{id}                 get, update, delete
///
/// /founders                     list, create
/// /founders/with-client         create linked to an existing client
/// /founders/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/founders", founder::router())
}
