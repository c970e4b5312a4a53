//! Handlers for the `/founders` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use clientele_core::error::CoreError;
use clientele_core::linking;
use clientele_core::types::DbId;
use clientele_db::models::founder::{
    CreateFounder, CreateFounderWithClient, Founder, UpdateFounder,
};
use clientele_db::repositories::{ClientRepo, FounderRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::handlers::{created, Created};
use crate::routes::API_PREFIX;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Founder",
        id,
    })
}

fn location(id: DbId) -> String {
    format!("{API_PREFIX}/founders/{id}")
}

/// POST /api/v1/founders
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFounder>,
) -> AppResult<Created<Founder>> {
    let founder = FounderRepo::create(&state.pool, &input, None).await?;
    tracing::info!(founder_id = founder.id, "Founder created");
    Ok(created(location(founder.id), founder))
}

/// POST /api/v1/founders/with-client
///
/// A sole proprietor that already has a founder rejects the new one.
pub async fn create_with_client(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFounderWithClient>,
) -> AppResult<Created<Founder>> {
    let mut tx = state.pool.begin().await?;

    let client = ClientRepo::lock_by_id(&mut *tx, input.client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: input.client_id,
        }))?;
    let linked = FounderRepo::count_by_client(&mut *tx, client.id).await?;
    linking::ensure_can_accept_founder(client.client_type, linked)?;

    let founder = FounderRepo::create(&mut *tx, &input.founder(), Some(client.id)).await?;
    tx.commit().await?;

    tracing::info!(
        founder_id = founder.id,
        client_id = client.id,
        "Founder created under client",
    );
    Ok(created(location(founder.id), founder))
}

/// GET /api/v1/founders
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Founder>>> {
    let founders = FounderRepo::list(&state.pool).await?;
    Ok(Json(founders))
}

/// GET /api/v1/founders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<Founder>> {
    let founder = FounderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(founder))
}

/// PUT /api/v1/founders/{id}
///
/// Moving the founder onto a sole proprietor that already has one displaces
/// the existing founder.
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFounder>,
) -> AppResult<Json<Founder>> {
    let mut tx = state.pool.begin().await?;

    let current = FounderRepo::lock_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(target) = linking::relink_target(current.client_id, input.client_id) {
        let client = ClientRepo::lock_by_id(&mut *tx, target)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Rule(linking::TARGET_CLIENT_NOT_FOUND.to_string()))
            })?;

        let linked = FounderRepo::count_by_client(&mut *tx, client.id).await?;
        if linking::should_displace(client.client_type, linked) {
            let displaced = FounderRepo::unlink_all_for_client(&mut *tx, client.id).await?;
            tracing::info!(
                client_id = client.id,
                displaced,
                "Sole proprietor founder displaced",
            );
        }

        FounderRepo::link(&mut *tx, id, client.id).await?;
        tracing::info!(
            founder_id = id,
            from_client_id = ?current.client_id,
            to_client_id = client.id,
            "Founder relinked",
        );
    }

    let founder = FounderRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;
    Ok(Json(founder))
}

/// DELETE /api/v1/founders/{id}
///
/// The client the founder belonged to is left in place.
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FounderRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(founder_id = id, "Founder deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
