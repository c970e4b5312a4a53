//! Request handlers for clients and founders.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `clientele_db`, apply
//! the linking rules from `clientele_core`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod client;
pub mod founder;

use axum::http::{header, HeaderName, StatusCode};
use axum::Json;

/// `201 Created` with a `Location` header pointing at the new resource.
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

pub(crate) fn created<T>(location: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}
