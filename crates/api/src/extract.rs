//! Extractors that reject bad input with an [`AppError`] before the handler runs.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body deserialized into `T` and checked with [`Validate`].
///
/// Malformed JSON is rejected as [`AppError::BadRequest`]; a well-formed
/// body that fails validation becomes a `VALIDATION_ERROR`. Either way the
/// handler body never sees the input.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateFounder>) -> AppResult<...> {
///     // `input` is known to satisfy its field constraints here.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameters that reject unparsable segments as [`AppError::BadRequest`].
///
/// `GET /clients/abc` answers 400 with the usual `{error, code}` JSON body
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
