//! Handlers for the `/clients` resource.
//!
//! Every mutating handler runs in one transaction. Founder rows are locked
//! before they are handed to a client; a client row is locked before its
//! founder set changes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use clientele_core::error::CoreError;
use clientele_core::linking;
use clientele_core::types::DbId;
use clientele_db::models::client::{
    ClientWithFounders, CreateClient, CreateClientWithFounder, UpdateClient,
};
use clientele_db::repositories::{ClientRepo, FounderRepo};
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::handlers::{created, Created};
use crate::routes::API_PREFIX;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Client",
        id,
    })
}

fn location(id: DbId) -> String {
    format!("{API_PREFIX}/clients/{id}")
}

/// Reload a client with its founders inside the current transaction.
async fn load(conn: &mut PgConnection, id: DbId) -> AppResult<ClientWithFounders> {
    ClientRepo::find_with_founders(conn, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ClientWithFounders>>> {
    let mut conn = state.pool.acquire().await?;
    let clients = ClientRepo::list_with_founders(&mut conn).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<ClientWithFounders>> {
    let mut conn = state.pool.acquire().await?;
    let client = load(&mut conn, id).await?;
    Ok(Json(client))
}

/// POST /api/v1/clients
///
/// The new client takes over the free founder with the lowest id. Fails
/// when every founder is already linked.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateClient>,
) -> AppResult<Created<ClientWithFounders>> {
    let mut tx = state.pool.begin().await?;

    let founder = linking::require_free_founder(FounderRepo::lock_first_free(&mut *tx).await?)?;
    let client = ClientRepo::create(&mut *tx, &input).await?;
    FounderRepo::link(&mut *tx, founder.id, client.id).await?;

    let result = load(&mut tx, client.id).await?;
    tx.commit().await?;

    tracing::info!(
        client_id = client.id,
        founder_id = founder.id,
        "Client created with free founder",
    );

    Ok(created(location(client.id), result))
}

/// POST /api/v1/clients/with-founder
pub async fn create_with_founder(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateClientWithFounder>,
) -> AppResult<Created<ClientWithFounders>> {
    let mut tx = state.pool.begin().await?;

    let founder = FounderRepo::lock_by_id(&mut *tx, input.founder_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Founder",
            id: input.founder_id,
        }))?;
    linking::ensure_founder_free(founder.client_id)?;

    let client = ClientRepo::create(&mut *tx, &input.client()).await?;
    FounderRepo::link(&mut *tx, founder.id, client.id).await?;

    let result = load(&mut tx, client.id).await?;
    tx.commit().await?;

    tracing::info!(
        client_id = client.id,
        founder_id = founder.id,
        "Client created around founder",
    );

    Ok(created(location(client.id), result))
}

/// PUT /api/v1/clients/{id}
///
/// Changing the type keeps only the founder with the lowest id.
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateClient>,
) -> AppResult<Json<ClientWithFounders>> {
    let mut tx = state.pool.begin().await?;

    let current = ClientRepo::lock_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let linked: Vec<DbId> = FounderRepo::list_by_client(&mut *tx, id)
        .await?
        .iter()
        .map(|f| f.id)
        .collect();
    let released =
        linking::founders_released_on_type_change(current.client_type, input.client_type, &linked);
    if !released.is_empty() {
        FounderRepo::unlink_many(&mut *tx, &released).await?;
        tracing::info!(client_id = id, released = ?released, "Founders released on type change");
    }

    ClientRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    let result = load(&mut tx, id).await?;
    tx.commit().await?;
    Ok(Json(result))
}

/// DELETE /api/v1/clients/{id}
///
/// Linked founders are released, never deleted.
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    ClientRepo::lock_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let released = FounderRepo::unlink_all_for_client(&mut *tx, id).await?;
    ClientRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(client_id = id, released, "Client deleted");
    Ok(StatusCode::NO_CONTENT)
}
